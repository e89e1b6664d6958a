mod tileset;
