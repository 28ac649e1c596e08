mod blog;
mod message;
mod user;
