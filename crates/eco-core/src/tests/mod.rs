mod format;
mod models;
