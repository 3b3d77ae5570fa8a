//! Built-in directory records the application starts with.

use artistly_core::catalog::{Artist, ArtistStatus};
use artistly_core::ids::ArtistId;

struct SeedArtist {
    id: u32,
    name: &'static str,
    categories: &'static [&'static str],
    price_range: &'static str,
    location: &'static str,
    photo: &'static str,
    bio: &'static str,
    languages: &'static [&'static str],
    experience: &'static str,
    available_for_travel: bool,
    status: ArtistStatus,
}

const SEED: &[SeedArtist] = &[
    SeedArtist {
        id: 1,
        name: "Priya Sharma",
        categories: &["Singer"],
        price_range: "₹15,000-₹50,000",
        location: "Mumbai",
        photo: "1516680",
        bio: "Professional playback singer with 8 years of experience in Bollywood and regional cinema.",
        languages: &["Hindi", "English", "Marathi"],
        experience: "5-10",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 2,
        name: "Rahul Kapoor",
        categories: &["DJ"],
        price_range: "₹25,000-₹75,000",
        location: "Delhi",
        photo: "1043471",
        bio: "International DJ specializing in electronic music and Bollywood remixes for weddings and corporate events.",
        languages: &["Hindi", "English", "Punjabi"],
        experience: "10+",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 3,
        name: "Meera Nair",
        categories: &["Dancer", "Choreographer"],
        price_range: "₹20,000-₹60,000",
        location: "Bangalore",
        photo: "1462636",
        bio: "Classical and contemporary dance expert with performances across India and abroad.",
        languages: &["Tamil", "English", "Hindi", "Malayalam"],
        experience: "5-10",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 4,
        name: "Arjun Singh",
        categories: &["Speaker", "Comedian"],
        price_range: "₹10,000-₹30,000",
        location: "Pune",
        photo: "1040880",
        bio: "Motivational speaker and stand-up comedian with expertise in corporate training and entertainment.",
        languages: &["Hindi", "English", "Marathi"],
        experience: "2-5",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 5,
        name: "Kavitha Reddy",
        categories: &["Singer"],
        price_range: "₹12,000-₹35,000",
        location: "Chennai",
        photo: "1687678",
        bio: "Carnatic and playback singer specializing in South Indian classical and film music.",
        languages: &["Tamil", "Telugu", "Hindi", "English"],
        experience: "5-10",
        available_for_travel: false,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 6,
        name: "Vikram Joshi",
        categories: &["Musician"],
        price_range: "₹18,000-₹45,000",
        location: "Jaipur",
        photo: "1205033",
        bio: "Multi-instrumentalist specializing in Indian classical and fusion music performances.",
        languages: &["Hindi", "English", "Rajasthani"],
        experience: "10+",
        available_for_travel: true,
        status: ArtistStatus::Pending,
    },
    SeedArtist {
        id: 7,
        name: "Sneha Gupta",
        categories: &["Dancer"],
        price_range: "₹15,000-₹40,000",
        location: "Kolkata",
        photo: "1130626",
        bio: "Bharatanatyam and Bollywood dance performer with national level competition wins.",
        languages: &["Bengali", "Hindi", "English"],
        experience: "2-5",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 8,
        name: "Rohit Mehta",
        categories: &["DJ", "Musician"],
        price_range: "₹30,000-₹80,000",
        location: "Goa",
        photo: "1190297",
        bio: "Electronic music producer and DJ with international festival experience.",
        languages: &["English", "Hindi", "Konkani"],
        experience: "5-10",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 9,
        name: "Anita Kumari",
        categories: &["Speaker"],
        price_range: "₹8,000-₹25,000",
        location: "Lucknow",
        photo: "1239291",
        bio: "Corporate trainer and motivational speaker specializing in leadership and personal development.",
        languages: &["Hindi", "English", "Urdu"],
        experience: "10+",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 10,
        name: "Karthik Iyer",
        categories: &["Musician", "Singer"],
        price_range: "₹20,000-₹55,000",
        location: "Kochi",
        photo: "1222271",
        bio: "Playback singer and music composer with credits in Malayalam and Tamil cinema.",
        languages: &["Malayalam", "Tamil", "Hindi", "English"],
        experience: "5-10",
        available_for_travel: true,
        status: ArtistStatus::Pending,
    },
    SeedArtist {
        id: 11,
        name: "Deepika Sharma",
        categories: &["Comedian"],
        price_range: "₹12,000-₹35,000",
        location: "Chandigarh",
        photo: "1065084",
        bio: "Stand-up comedian and content creator with viral social media presence.",
        languages: &["Hindi", "English", "Punjabi"],
        experience: "2-5",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
    SeedArtist {
        id: 12,
        name: "Ramesh Patel",
        categories: &["Magician"],
        price_range: "₹10,000-₹30,000",
        location: "Ahmedabad",
        photo: "1386604",
        bio: "Professional magician and mentalist entertaining audiences for over 15 years.",
        languages: &["Gujarati", "Hindi", "English"],
        experience: "10+",
        available_for_travel: true,
        status: ArtistStatus::Approved,
    },
];

fn photo_url(photo: &str) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
    )
}

/// The twelve directory entries, in id order.
pub fn seed_artists() -> Vec<Artist> {
    SEED.iter()
        .map(|seed| Artist {
            id: ArtistId(seed.id),
            name: seed.name.to_string(),
            categories: seed.categories.iter().map(|c| c.to_string()).collect(),
            price_range: seed.price_range.to_string(),
            location: seed.location.to_string(),
            image: photo_url(seed.photo),
            bio: seed.bio.to_string(),
            languages: seed.languages.iter().map(|l| l.to_string()).collect(),
            experience: seed.experience.to_string(),
            available_for_travel: seed.available_for_travel,
            status: seed.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistly_core::review::StatusCounts;

    #[test]
    fn seed_has_twelve_artists_with_unique_ids() {
        let artists = seed_artists();
        assert_eq!(artists.len(), 12);

        let mut ids: Vec<_> = artists.iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn seed_status_mix() {
        let counts = StatusCounts::tally(&seed_artists());
        assert_eq!(counts.total, 12);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.approved, 10);
        assert_eq!(counts.rejected, 0);
    }

    #[test]
    fn image_urls_point_at_photo_ids() {
        let priya = &seed_artists()[0];
        assert!(priya.image.contains("/photos/1516680/pexels-photo-1516680.jpeg"));
    }
}
