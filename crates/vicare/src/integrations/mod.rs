pub mod vicare;
