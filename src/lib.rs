//! # userring
//!
//! A small library for learning how a circular doubly linked list with a
//! sentinel node works, wrapped in a roster of users.
//!
//! The ring lives in [`circular_list`]. [`UserList`] puts fixed-width
//! [`Username`]s in it and hands out increasing ids. [`session`] drives the
//! `userring` binary: it prompts for names on stdin until end of input and
//! then prints the roster.
//!
//! [`visualize`] and [`image`] show the same ring as a DOT graph and as the
//! bytes a C program would keep in memory.

pub mod circular_list;
pub mod error;
pub mod image;
pub mod input;
pub mod logging;
pub mod output;
pub mod session;
pub mod user;
pub mod user_list;
pub mod visualize;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use user::{MAX_USERNAME_LEN, User, UserId, Username};
pub use user_list::{MAX_USERS, UserList};
