//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements   | Connects to                 |
//! |--------------|--------------|-----------------------------|
//! | `fs_source`  | StatusSource | JSON status records on disk |
//! | `console`    | Indicator    | terminal line               |
//! | `pin`        | Indicator    | embedded-hal output pin     |
//! | `time`       | Delay        | async-io-mini timer reactor |
//! | `log_sink`   | EventSink    | `log` facade                |

pub mod console;
pub mod fs_source;
pub mod log_sink;
pub mod pin;
pub mod time;
