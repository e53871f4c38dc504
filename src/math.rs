pub mod int;
