#![no_std]

mod contract;
mod controller;
pub mod events;
pub mod hook;
mod math;
pub mod msg;
pub mod storage;

pub use crate::contract::{ LrtSwapHook, LrtSwapHookClient };

#[cfg(test)]
mod tests;
