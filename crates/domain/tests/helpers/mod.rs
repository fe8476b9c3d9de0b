#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use zonewire_domain::Zone;

pub const ZOO_ORIGIN: &str = "cs430.luther.edu";

pub const ZOO_ZONE_TEXT: &str = include_str!("../fixtures/zoo.zone");

pub fn zoo_zone() -> Zone {
    Zone::parse(ZOO_ZONE_TEXT).expect("zoo.zone fixture must parse")
}
