//! HTTP request handlers.
//!
//! - `contact` - Contact form submission and message reads
//! - `blog` - Writer and editor blog endpoints, each behind a role check

pub mod blog;
pub mod contact;

#[cfg(test)]
mod test;
