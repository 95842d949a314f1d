//! Fuzz target: status record classifier
//!
//! Feeds arbitrary bytes to the classifier as fuse 0's record and verifies:
//! - No panics under arbitrary byte inputs
//! - An existing record never classifies as `Missing`
//! - `Operational` only for bodies that parse as a record with `status: true`
//!
//! cargo fuzz run fuzz_status_record

#![no_main]

use libfuzzer_sys::fuzz_target;
use fusediag::fuse::{Fault, FuseIndex, StatusRecord, classify_record};

fuzz_target!(|data: &[u8]| {
    let fuse = FuseIndex::from_flag(data.first().is_some_and(|b| b & 1 == 1));

    match classify_record(fuse, data) {
        Ok(_) => assert_eq!(
            StatusRecord::parse(data),
            Some(StatusRecord { status: true }),
            "operational without a true status record"
        ),
        Err(Fault::Broken(f)) => assert_eq!(f, fuse),
        Err(Fault::Missing(_)) => panic!("existing record classified as missing"),
    }
});
