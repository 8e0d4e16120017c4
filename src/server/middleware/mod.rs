pub mod auth;
pub mod json;
pub mod session;
pub mod upload;

#[cfg(test)]
mod test;
