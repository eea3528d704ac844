mod access_token;
mod favorite;
mod movie;
mod resource;
mod user;
