//! Offline geocoding from static lookup tables.
//!
//! Resolution order: exact city match, then state plus region direction,
//! then the state's Central entry, and finally the India centroid. No
//! network geocoder is involved; every project always gets a coordinate.

pub type Coord = (f64, f64);

/// Geographic centre of India, the last-resort marker position.
pub const INDIA_CENTROID: Coord = (20.5937, 78.9629);

const CITY_COORDINATES: &[(&str, f64, f64)] = &[
    // Maharashtra
    ("Mumbai", 19.0760, 72.8777),
    ("Pune", 18.5204, 73.8567),
    ("Nagpur", 21.1458, 79.0882),
    ("Thane", 19.2183, 72.9781),
    ("Nashik", 19.9975, 73.7898),
    ("Aurangabad", 19.8762, 75.3433),
    ("Solapur", 17.6599, 75.9064),
    ("Kolhapur", 16.7050, 74.2433),
    ("Amravati", 20.9374, 77.7796),
    ("Nanded", 19.1383, 77.3210),
    // Delhi NCR
    ("Delhi", 28.7041, 77.1025),
    ("New Delhi", 28.6139, 77.2090),
    ("Gurgaon", 28.4595, 77.0266),
    ("Noida", 28.5355, 77.3910),
    ("Faridabad", 28.4089, 77.3178),
    // Karnataka
    ("Bangalore", 12.9716, 77.5946),
    ("Mysore", 12.2958, 76.6394),
    ("Hubli", 15.3173, 75.7139),
    ("Mangalore", 12.9141, 74.8560),
    ("Belgaum", 15.8497, 74.4977),
    ("Gulbarga", 17.3297, 76.8343),
    ("Davanagere", 14.4644, 75.9218),
    ("Bellary", 15.1394, 76.9214),
    ("Bijapur", 16.8240, 75.7154),
    ("Shimoga", 13.9299, 75.5681),
    // Tamil Nadu
    ("Chennai", 13.0827, 80.2707),
    ("Coimbatore", 11.0168, 76.9558),
    ("Madurai", 9.9252, 78.1198),
    ("Trichy", 10.7905, 78.7047),
    ("Salem", 11.6643, 78.1460),
    ("Tirunelveli", 8.7139, 77.7567),
    ("Erode", 11.3410, 77.7172),
    ("Vellore", 12.9202, 79.1500),
    ("Thoothukudi", 8.7642, 78.1348),
    ("Dindigul", 10.3456, 77.9516),
    // West Bengal
    ("Kolkata", 22.5726, 88.3639),
    ("Howrah", 22.5892, 88.3103),
    ("Durgapur", 23.5204, 87.3119),
    ("Asansol", 23.6739, 86.9524),
    ("Siliguri", 26.7271, 88.3953),
    ("Bardhaman", 23.2402, 87.8694),
    ("Malda", 25.0118, 88.1373),
    ("Baharampur", 24.1047, 88.2515),
    ("Habra", 22.8304, 88.6300),
    ("Kharagpur", 22.3149, 87.3105),
    // Gujarat
    ("Ahmedabad", 23.0225, 72.5714),
    ("Surat", 21.1702, 72.8311),
    ("Vadodara", 22.3072, 73.1812),
    ("Rajkot", 22.3039, 70.8022),
    ("Bhavnagar", 21.7645, 72.1519),
    ("Jamnagar", 22.4707, 70.0577),
    ("Junagadh", 21.5222, 70.4579),
    ("Gandhinagar", 23.2156, 72.6369),
    ("Nadiad", 22.6939, 72.8616),
    ("Anand", 22.5645, 72.9289),
    // Rajasthan
    ("Jaipur", 26.9124, 75.7873),
    ("Jodhpur", 26.2389, 73.0243),
    ("Udaipur", 24.5854, 73.7123),
    ("Kota", 25.2138, 75.8648),
    ("Bikaner", 28.0229, 73.3119),
    ("Ajmer", 26.4499, 74.6399),
    ("Bharatpur", 27.1767, 77.6961),
    ("Alwar", 27.5618, 76.6081),
    ("Sikar", 27.6119, 75.1397),
    ("Pali", 25.7713, 73.3237),
    // Uttar Pradesh
    ("Lucknow", 26.8467, 80.9462),
    ("Kanpur", 26.4499, 80.3319),
    ("Agra", 27.1767, 78.0081),
    ("Varanasi", 25.3176, 82.9739),
    ("Meerut", 28.9845, 77.7064),
    ("Allahabad", 25.4358, 81.8463),
    ("Bareilly", 28.3670, 79.4304),
    ("Aligarh", 27.8974, 78.0880),
    ("Moradabad", 28.8388, 78.7738),
    ("Saharanpur", 29.9670, 77.5451),
    // Bihar
    ("Patna", 25.5941, 85.1376),
    ("Gaya", 24.7950, 85.0000),
    ("Bhagalpur", 25.2445, 86.9718),
    ("Muzaffarpur", 26.1209, 85.3647),
    ("Darbhanga", 26.1667, 85.9000),
    ("Purnia", 25.7781, 87.4742),
    ("Arrah", 25.5560, 84.6624),
    ("Begusarai", 25.4180, 86.1289),
    ("Katihar", 25.5400, 87.5700),
    ("Chhapra", 25.7800, 84.7500),
    // Punjab
    ("Chandigarh", 30.7333, 76.7794),
    ("Ludhiana", 30.9010, 75.8573),
    ("Amritsar", 31.6340, 74.8723),
    ("Jalandhar", 31.3260, 75.5762),
    ("Patiala", 30.3398, 76.3869),
    ("Bathinda", 30.2070, 74.9483),
    ("Mohali", 30.7046, 76.7179),
    ("Firozpur", 30.9257, 74.6131),
    ("Batala", 31.8186, 75.2027),
    ("Moga", 30.8158, 75.1689),
    // Haryana
    ("Panipat", 29.3909, 76.9635),
    ("Ambala", 30.3753, 76.7821),
    ("Yamunanagar", 30.1290, 77.2670),
    ("Rohtak", 28.8955, 76.6066),
    ("Hisar", 29.1492, 75.7217),
    ("Karnal", 29.6857, 76.9905),
    ("Sonipat", 28.9931, 77.0151),
    ("Panchkula", 30.6942, 76.8606),
    // Andhra Pradesh and Telangana
    ("Hyderabad", 17.3850, 78.4867),
    ("Vijayawada", 16.5062, 80.6480),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Tirupati", 13.6288, 79.4192),
    ("Warangal", 17.9689, 79.5941),
    ("Guntur", 16.3067, 80.4365),
    ("Rajahmundry", 17.0005, 81.8040),
    ("Kadapa", 14.4753, 78.8298),
    ("Kurnool", 15.8309, 78.0422),
    ("Nellore", 14.4426, 79.9865),
    // Kerala
    ("Thiruvananthapuram", 8.5241, 76.9366),
    ("Kochi", 9.9312, 76.2673),
    ("Kozhikode", 11.2588, 75.7804),
    ("Thrissur", 10.8505, 76.2711),
    ("Kollam", 8.8932, 76.6141),
    ("Palakkad", 10.7867, 76.6548),
    ("Malappuram", 11.0404, 76.0819),
    ("Kannur", 11.8745, 75.3704),
    ("Kasaragod", 12.4984, 74.9899),
    ("Alappuzha", 9.4981, 76.3388),
    // Odisha
    ("Bhubaneswar", 20.2961, 85.8245),
    ("Cuttack", 20.4625, 85.8820),
    ("Rourkela", 22.2604, 84.8536),
    ("Berhampur", 19.3142, 84.7941),
    ("Sambalpur", 21.4704, 83.9701),
    ("Puri", 19.8134, 85.8315),
    ("Balasore", 21.4945, 86.9336),
    ("Bhadrak", 21.0550, 86.5000),
    ("Baripada", 21.9333, 86.7333),
    ("Jharsuguda", 21.8500, 84.0333),
    // Assam
    ("Guwahati", 26.1445, 91.7362),
    ("Silchar", 24.8167, 92.8000),
    ("Dibrugarh", 27.4833, 94.9000),
    ("Jorhat", 26.7500, 94.2167),
    ("Nagaon", 26.3500, 92.6833),
    ("Tinsukia", 27.4833, 95.3667),
    ("Tezpur", 26.6333, 92.8000),
    ("Barpeta", 26.3167, 91.0167),
    ("Goalpara", 26.1667, 90.6167),
    ("Karimganj", 24.8667, 92.3500),
    // Madhya Pradesh
    ("Bhopal", 23.1815, 77.4344),
    ("Indore", 22.7196, 75.8577),
    ("Gwalior", 26.2183, 78.1828),
    ("Jabalpur", 23.1815, 79.9864),
    ("Ujjain", 23.1765, 75.7885),
    ("Sagar", 23.8333, 78.7167),
    ("Dewas", 22.9667, 76.0667),
    ("Satna", 24.5833, 80.8333),
    ("Ratlam", 23.3167, 75.0667),
    ("Rewa", 24.5333, 81.3000),
    // Jharkhand
    ("Ranchi", 23.3441, 85.3096),
    ("Jamshedpur", 22.8046, 86.2029),
    ("Dhanbad", 23.7957, 86.4304),
    ("Bokaro", 23.6693, 85.9786),
    ("Deoghar", 24.4833, 86.7000),
    ("Phusro", 23.7833, 85.9000),
    ("Hazaribagh", 23.9833, 85.3500),
    ("Giridih", 24.1833, 86.3000),
    ("Ramgarh", 23.6333, 85.5167),
    ("Medininagar", 24.4333, 84.1333),
    // Chhattisgarh
    ("Raipur", 21.2514, 81.6296),
    ("Bhilai", 21.2167, 81.4333),
    ("Bilaspur", 22.0833, 82.1500),
    ("Korba", 22.3500, 82.6833),
    ("Rajnandgaon", 21.1000, 81.0333),
    ("Raigarh", 21.9000, 83.4000),
    ("Jagdalpur", 19.0833, 82.0333),
    ("Ambikapur", 23.1167, 83.2000),
    ("Durg", 21.1833, 81.2833),
    ("Bhatapara", 21.7333, 81.9500),
];

/// Per-state anchors keyed by region direction, in the order
/// Central, North, South, East, West.
const STATE_REGIONS: &[(&str, [Coord; 5])] = &[
    (
        "Maharashtra",
        [
            (19.0760, 72.8777),
            (20.9374, 77.7796),
            (18.5204, 73.8567),
            (19.2183, 72.9781),
            (19.0330, 72.8570),
        ],
    ),
    (
        "Delhi",
        [
            (28.7041, 77.1025),
            (28.7041, 77.1025),
            (28.4595, 77.0266),
            (28.7041, 77.1025),
            (28.7041, 77.1025),
        ],
    ),
    (
        "Karnataka",
        [
            (12.9716, 77.5946),
            (15.3173, 75.7139),
            (12.2958, 76.6394),
            (12.2958, 76.6394),
            (14.5204, 74.8567),
        ],
    ),
    (
        "Tamil Nadu",
        [
            (13.0827, 80.2707),
            (11.0168, 76.9558),
            (8.0883, 77.5385),
            (10.7905, 78.7047),
            (9.9252, 78.1198),
        ],
    ),
    (
        "West Bengal",
        [
            (22.5726, 88.3639),
            (26.7167, 88.4167),
            (22.5726, 88.3639),
            (22.5726, 88.3639),
            (22.5726, 88.3639),
        ],
    ),
    (
        "Gujarat",
        [
            (23.0225, 72.5714),
            (24.5854, 72.7123),
            (21.1702, 72.8311),
            (23.0225, 72.5714),
            (22.3039, 70.8022),
        ],
    ),
    (
        "Rajasthan",
        [
            (26.9124, 75.7873),
            (29.9457, 73.1123),
            (24.5854, 73.7123),
            (26.9124, 75.7873),
            (26.2389, 73.0243),
        ],
    ),
    (
        "Uttar Pradesh",
        [
            (26.8467, 80.9462),
            (28.4595, 77.0266),
            (25.3176, 82.9739),
            (26.8467, 80.9462),
            (26.8467, 80.9462),
        ],
    ),
    (
        "Bihar",
        [
            (25.5941, 85.1376),
            (26.8467, 85.1376),
            (24.5854, 85.1376),
            (25.5941, 87.1376),
            (25.5941, 83.1376),
        ],
    ),
    (
        "Punjab",
        [
            (31.1471, 75.3412),
            (32.1471, 75.3412),
            (30.1471, 75.3412),
            (31.1471, 76.3412),
            (31.1471, 74.3412),
        ],
    ),
    (
        "Haryana",
        [
            (28.4595, 77.0266),
            (29.4595, 77.0266),
            (27.4595, 77.0266),
            (28.4595, 78.0266),
            (28.4595, 76.0266),
        ],
    ),
];

fn region_index(region: &str) -> Option<usize> {
    match region {
        "Central" => Some(0),
        "North" => Some(1),
        "South" => Some(2),
        "East" => Some(3),
        "West" => Some(4),
        _ => None,
    }
}

fn state_regions(state: &str) -> Option<&'static [Coord; 5]> {
    STATE_REGIONS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, coords)| coords)
}

/// Resolve marker coordinates for a project. `region` is the project's
/// location field ("North", "Central", ...).
pub fn resolve_coordinates(
    state: Option<&str>,
    city: Option<&str>,
    region: &str,
) -> Coord {
    if let Some(city) = city {
        if let Some((_, lat, lng)) = CITY_COORDINATES.iter().find(|(name, _, _)| *name == city) {
            return (*lat, *lng);
        }
    }

    if let Some(state) = state {
        if let Some(coords) = state_regions(state) {
            if let Some(index) = region_index(region) {
                return coords[index];
            }
            return coords[0];
        }
    }

    INDIA_CENTROID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_match_wins_over_state() {
        let coord = resolve_coordinates(Some("Maharashtra"), Some("Nagpur"), "South");
        assert_eq!(coord, (21.1458, 79.0882));
    }

    #[test]
    fn state_and_region_resolve_without_city() {
        let coord = resolve_coordinates(Some("Karnataka"), None, "North");
        assert_eq!(coord, (15.3173, 75.7139));
    }

    #[test]
    fn unknown_city_falls_back_to_state_region() {
        let coord = resolve_coordinates(Some("Tamil Nadu"), Some("Ooty"), "West");
        assert_eq!(coord, (9.9252, 78.1198));
    }

    #[test]
    fn unknown_region_uses_state_central() {
        let coord = resolve_coordinates(Some("Gujarat"), None, "Somewhere");
        assert_eq!(coord, (23.0225, 72.5714));
    }

    #[test]
    fn unknown_everything_uses_india_centroid() {
        assert_eq!(resolve_coordinates(None, None, ""), INDIA_CENTROID);
        assert_eq!(
            resolve_coordinates(Some("Atlantis"), Some("Nowhere"), "North"),
            INDIA_CENTROID
        );
    }
}
