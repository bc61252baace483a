mod role;
mod session;
mod user;
