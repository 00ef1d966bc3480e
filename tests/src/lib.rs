//! Integration tests for the toggler. Nothing here touches real hardware:
//! every command goes to a stub from [`support`].

pub mod support;

#[cfg(test)]
mod toggle;
