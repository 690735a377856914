use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use lanecost::{json::types::JsonBooking, rates::driver_type::DriverType, trip::booking::Booking};

use crate::file_utils::read_folder;

/// Bookings from a single file or from every JSON file of a folder.
pub fn read_bookings(input: &Path) -> anyhow::Result<Vec<(PathBuf, Booking)>> {
    let paths = if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        read_folder(input)?
    };

    paths
        .into_iter()
        .map(|path| {
            let booking = read_booking(&path)?;
            Ok((path, booking))
        })
        .collect()
}

pub fn read_booking(path: &Path) -> anyhow::Result<Booking> {
    let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
    let json: JsonBooking = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing booking {path:?}"))?;

    json.into_booking()
        .with_context(|| format!("invalid booking {path:?}"))
}

pub fn parse_driver_type(input: &str) -> Result<DriverType, String> {
    input.parse::<DriverType>().map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    use std::env;

    use lanecost::rates::driver_type::OoZone;

    use super::*;

    #[test]
    fn test_read_bookings_from_folder() {
        let folder = env::current_dir().unwrap().join("tests/fixtures/bookings");
        let bookings = read_bookings(&folder).unwrap();

        let ids: Vec<_> = bookings
            .iter()
            .map(|(_, booking)| booking.id().unwrap())
            .collect();
        assert_eq!(ids, vec!["ORD-10401", "ORD-10388", "ORD-10392"]);

        let (_, windsor_detroit) = &bookings[0];
        assert!(windsor_detroit.lane().is_cross_border());

        let (_, london_ottawa) = &bookings[2];
        assert!(london_ottawa.lane().is_miles_estimated());
        assert_eq!(london_ottawa.revenue(), 1350.0);
    }

    #[test]
    fn test_parse_driver_type() {
        assert_eq!(
            parse_driver_type("oo-zone-2"),
            Ok(DriverType::OwnerOperator(Some(OoZone::Zone2)))
        );
        assert!(parse_driver_type("bicycle").is_err());
    }
}
