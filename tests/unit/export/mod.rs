mod collision;
