//! Mock wallet generation and address display helpers

pub mod wallet;

pub use wallet::{
    format_address, Wallet, ADDRESS_ALPHABET, ADDRESS_BODY_LEN, PUBLIC_KEY_PREFIX,
    SECRET_KEY_PREFIX,
};
