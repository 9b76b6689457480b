//! Flight emission estimate.

/// Rough per-kilometer CO2 output of a whole flight, in kilograms.
pub const DEFAULT_CO2_KG_PER_FLIGHT_KM: u32 = 12;

/// CO2 estimate in whole metric tons for a route of the given length.
/// Integer floor division; short routes legitimately come out as zero.
/// The multiply runs in u64 so absurd wire distances cannot overflow.
pub fn co2_tons(route_distance_km: u32, co2_kg_per_km: u32) -> u32 {
    let tons = route_distance_km as u64 * co2_kg_per_km as u64 / 1000;
    tons.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_to_whole_tons() {
        assert_eq!(co2_tons(450, 12), 5); // 5400 kg
        assert_eq!(co2_tons(999, 1), 0);
        assert_eq!(co2_tons(1000, 1), 1);
    }

    #[test]
    fn short_hop_rounds_down_to_zero() {
        assert_eq!(co2_tons(50, DEFAULT_CO2_KG_PER_FLIGHT_KM), 0);
    }

    #[test]
    fn absurd_wire_distance_does_not_overflow() {
        // A 400 million km "route" times 12 kg/km exceeds u32 in kilograms.
        assert_eq!(co2_tons(400_000_000, 12), 4_800_000);
        assert_eq!(co2_tons(u32::MAX, u32::MAX), u32::MAX);
    }
}
