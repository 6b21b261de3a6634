mod insert;
mod select;
