//! API middleware stack.
//!
//! Only one layer today: the access log, which runs outermost so it sees
//! the final status of every request, rejections included.

pub mod audit;
