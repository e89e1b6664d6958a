mod layout;
mod segmenter;
