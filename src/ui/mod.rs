pub mod components;
pub mod pages;
pub mod presenter;
pub mod shell;
