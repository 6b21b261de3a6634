mod analytics;
mod contact;
mod loader;
