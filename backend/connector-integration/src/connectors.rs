pub mod paypal;

pub use self::paypal::PaypalUnified;
