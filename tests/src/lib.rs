#[cfg(test)]
mod util;

mod consistency;
mod interfaces;
mod paths;
