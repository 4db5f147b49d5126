//! Static site content rendered by the pages.
//!
//! Content is published in Indonesian only; page chrome around it is
//! translated through the catalog.

use mizan_forms::sanitize::is_safe_url;

/// Image source for `url`, or `None` when it is not an absolute http(s) link.
#[must_use]
pub fn safe_image(url: &str) -> Option<&str> {
    is_safe_url(url).then_some(url)
}

/// Shared dormitory card photo.
pub const DORMITORY_IMAGE: &str =
    "https://images.unsplash.com/photo-1689239404320-1f8ff60672e4?q=80&w=1600&fit=crop";

/// One dormitory run by the foundation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dormitory {
    /// Display name.
    pub name: &'static str,
    /// Street address.
    pub address: &'static str,
    /// Number of beds.
    pub capacity: u32,
    /// Children currently housed.
    pub occupancy: u32,
    /// Facility labels.
    pub facilities: &'static [&'static str],
    /// Contact phone.
    pub phone: &'static str,
    /// Contact email.
    pub email: &'static str,
}

impl Dormitory {
    /// Beds still free; never negative.
    #[must_use]
    pub const fn available_beds(&self) -> u32 {
        self.capacity.saturating_sub(self.occupancy)
    }

    /// Occupancy as a whole percentage of capacity.
    #[must_use]
    pub const fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 {
            0
        } else {
            self.occupancy * 100 / self.capacity
        }
    }
}

/// Dormitory listing.
pub const DORMITORIES: [Dormitory; 6] = [
    Dormitory {
        name: "Asrama Jakarta Timur",
        address: "Jl. Raya Bogor KM 24, Cijantung, Jakarta Timur 13770",
        capacity: 120,
        occupancy: 95,
        facilities: &["Ruang Belajar", "Perpustakaan", "Masjid", "Klinik"],
        phone: "+62 21 8400 8080",
        email: "jakarta@rumahyatimmizan.org",
    },
    Dormitory {
        name: "Asrama Bandung",
        address: "Jl. Soekarno Hatta No. 456, Bandung",
        capacity: 80,
        occupancy: 72,
        facilities: &["Ruang Belajar", "Lab Komputer"],
        phone: "+62 22 7564 3210",
        email: "bandung@rumahyatimmizan.org",
    },
    Dormitory {
        name: "Asrama Surabaya",
        address: "Jl. Ahmad Yani No. 123, Surabaya",
        capacity: 100,
        occupancy: 88,
        facilities: &["Ruang Seni", "Kantin"],
        phone: "+62 31 5678 9012",
        email: "surabaya@rumahyatimmizan.org",
    },
    Dormitory {
        name: "Asrama Medan",
        address: "Jl. Gatot Subroto No. 789, Medan",
        capacity: 90,
        occupancy: 76,
        facilities: &["Lab Sains", "Area Parkir"],
        phone: "+62 61 4567 8901",
        email: "medan@rumahyatimmizan.org",
    },
    Dormitory {
        name: "Asrama Makassar",
        address: "Jl. Veteran No. 321, Makassar",
        capacity: 70,
        occupancy: 65,
        facilities: &["Ruang Makan", "Lapangan Futsal"],
        phone: "+62 411 234 5678",
        email: "makassar@rumahyatimmizan.org",
    },
    Dormitory {
        name: "Asrama Yogyakarta",
        address: "Jl. Malioboro No. 567, Yogyakarta",
        capacity: 85,
        occupancy: 79,
        facilities: &["Studio Musik", "Taman Baca"],
        phone: "+62 274 567 8901",
        email: "yogyakarta@rumahyatimmizan.org",
    },
];

/// A news article teaser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewsItem {
    /// Headline.
    pub title: &'static str,
    /// Summary paragraph.
    pub excerpt: &'static str,
    /// ISO date of publication.
    pub date: &'static str,
    /// Byline.
    pub author: &'static str,
    /// Category label.
    pub category: &'static str,
    /// Cover photo.
    pub image: &'static str,
}

/// Featured article first, then the rest by date.
pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "Rumah Yatim Mizan Raih Penghargaan Lembaga Sosial Terbaik 2024",
        excerpt: "Atas dedikasi dan kontribusi nyata dalam pemberdayaan anak yatim, Rumah Yatim Mizan meraih penghargaan bergengsi dari Kementerian Sosial RI.",
        date: "2024-03-15",
        author: "Tim Redaksi",
        category: "Penghargaan",
        image: "https://images.unsplash.com/photo-1484508665904-5b12a02c015d",
    },
    NewsItem {
        title: "Pembukaan Asrama Baru di Kota Palembang",
        excerpt: "Asrama ke-26 Rumah Yatim Mizan resmi dibuka untuk menampung 80 anak yatim di Sumatera Selatan.",
        date: "2024-03-10",
        author: "Ahmad Syafii",
        category: "Program",
        image: "https://images.unsplash.com/photo-1663124178598-71717cdea439",
    },
    NewsItem {
        title: "Kerjasama dengan Universitas Indonesia untuk Program Beasiswa",
        excerpt: "MoU ditandatangani untuk memberikan beasiswa penuh bagi 50 anak yatim berprestasi.",
        date: "2024-03-08",
        author: "Siti Nurhaliza",
        category: "Kemitraan",
        image: "https://images.unsplash.com/photo-1663124178598-71717cdea439",
    },
];

/// A downloadable report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    /// Title.
    pub title: &'static str,
    /// Category label.
    pub category: &'static str,
    /// ISO date of release.
    pub date: &'static str,
    /// Human-readable file size.
    pub size: &'static str,
    /// Download counter.
    pub downloads: u32,
    /// Short description.
    pub description: &'static str,
    /// Cover photo.
    pub image: &'static str,
}

/// Published reports.
pub const PUBLICATIONS: [Publication; 2] = [
    Publication {
        title: "Laporan Keuangan Tahunan 2023",
        category: "Laporan Keuangan",
        date: "2024-03-15",
        size: "2.5 MB",
        downloads: 1250,
        description: "Laporan lengkap hasil audit independen",
        image: "https://images.unsplash.com/photo-1683701844845-114d77be00ef",
    },
    Publication {
        title: "Hasil Audit Eksternal 2023",
        category: "Laporan Audit",
        date: "2024-02-28",
        size: "1.8 MB",
        downloads: 890,
        description: "Audit eksternal sebagai bukti transparansi",
        image: "https://images.unsplash.com/photo-1683701844845-114d77be00ef",
    },
];

/// Headline figure on the admin dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminStat {
    /// Label.
    pub title: &'static str,
    /// Pre-formatted value.
    pub value: &'static str,
}

/// Placeholder admin figures.
pub const ADMIN_STATS: [AdminStat; 4] = [
    AdminStat {
        title: "Total Donasi",
        value: "Rp 1.2M",
    },
    AdminStat {
        title: "Berita Dipublikasi",
        value: "45",
    },
    AdminStat {
        title: "Anak Yatim",
        value: "2,500",
    },
    AdminStat {
        title: "Publikasi",
        value: "35",
    },
];

/// Program areas, as translation keys, in display order.
pub const PROGRAM_KEYS: [&str; 5] = ["education", "health", "economy", "dawah", "social"];

#[cfg(test)]
mod tests {
    use super::*;
    use mizan_forms::looks_like_email;
    use mizan_i18n::TranslationCatalog;

    #[test]
    fn dormitories_are_not_overbooked() {
        for dormitory in DORMITORIES {
            assert!(dormitory.occupancy <= dormitory.capacity, "{}", dormitory.name);
            assert!(looks_like_email(dormitory.email), "{}", dormitory.email);
        }
        assert_eq!(DORMITORIES[0].available_beds(), 25);
        assert_eq!(DORMITORIES[1].occupancy_percent(), 90);
    }

    #[test]
    fn occupancy_handles_empty_capacity() {
        let empty = Dormitory {
            capacity: 0,
            occupancy: 3,
            ..DORMITORIES[0]
        };
        assert_eq!(empty.available_beds(), 0);
        assert_eq!(empty.occupancy_percent(), 0);
    }

    #[test]
    fn content_images_are_safe_links() {
        assert_eq!(safe_image(DORMITORY_IMAGE), Some(DORMITORY_IMAGE));
        for item in NEWS {
            assert_eq!(safe_image(item.image), Some(item.image), "{}", item.title);
        }
        for publication in PUBLICATIONS {
            assert!(safe_image(publication.image).is_some(), "{}", publication.title);
        }
    }

    #[test]
    fn unsafe_image_sources_are_dropped() {
        for source in [
            "javascript:alert(1)",
            "data:image/png;base64,AAAA",
            "/images/lead-ahmad.jpg",
            "ftp://images.example/a.jpg",
            "",
        ] {
            assert_eq!(safe_image(source), None, "{source:?}");
        }
    }

    #[test]
    fn program_keys_are_translated() {
        let catalog = TranslationCatalog::builtin();
        for language in catalog.languages() {
            for key in PROGRAM_KEYS {
                assert_ne!(catalog.resolve(language, key), key);
            }
        }
    }
}
