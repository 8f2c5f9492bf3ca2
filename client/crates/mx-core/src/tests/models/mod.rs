mod identity;
mod session;
