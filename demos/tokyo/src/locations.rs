//! The neighbourhoods solved by the demo, with pinned coordinates so the run
//! never needs a geocoding service.

use iso_core::GeoPoint;
use iso_oracle::StaticGeocoder;
use iso_solver::LocationQuery;

struct Neighbourhood {
    name:     &'static str,
    address:  &'static str,
    point:    GeoPoint,
    duration: f64,
}

const NEIGHBOURHOODS: &[Neighbourhood] = &[
    Neighbourhood {
        name:     "Shibuya",
        address:  "2 Chome Dogenzaka, Shibuya-ku, Tōkyō-to 150-0002, Japan",
        point:    GeoPoint::new(35.6595, 139.7005),
        duration: 45.0,
    },
    Neighbourhood {
        name:     "Ueno",
        address:  "Japan, 〒110-0005 Tōkyō-to, 台東区Ueno, 7 Chome−1−1",
        point:    GeoPoint::new(35.7141, 139.7774),
        duration: 40.0,
    },
    Neighbourhood {
        name:     "Ikebukuro",
        address:  "1丁目 Minamiikebukuro Toshima-ku, Tōkyō-to Japan",
        point:    GeoPoint::new(35.7295, 139.7109),
        duration: 35.0,
    },
    Neighbourhood {
        name:     "Shimokitazawa",
        address:  "Japan, 〒155-0031 Tōkyō-to, Setagaya-ku, Kitazawa, 2 Chome−２３",
        point:    GeoPoint::new(35.6618, 139.6675),
        duration: 30.0,
    },
    Neighbourhood {
        name:     "Kichijoji",
        address:  "Japan, 〒180-0003 Tōkyō-to, Musashino-shi, Kichijōji Minamichō, 2 Chome−１",
        point:    GeoPoint::new(35.7023, 139.5800),
        duration: 20.0,
    },
    Neighbourhood {
        name:     "Koenji",
        address:  "Japan, 〒166-0003 Tōkyō-to, Suginami-ku, Kōenjiminami, 4 Chome−４８",
        point:    GeoPoint::new(35.7053, 139.6496),
        duration: 25.0,
    },
    Neighbourhood {
        name:     "Nihonbashi",
        address:  "Japan, 〒103-0012 Tōkyō-to, Chūō-ku, Nihonbashihoridomechō, 2 Chome−１−１３",
        point:    GeoPoint::new(35.6870, 139.7810),
        duration: 25.0,
    },
    Neighbourhood {
        name:     "Meguro",
        address:  "Japan, 〒141-0021 Tōkyō-to, Shinagawa-ku, Kamiōsaki, 4 Chome−２−１",
        point:    GeoPoint::new(35.6340, 139.7157),
        duration: 25.0,
    },
    Neighbourhood {
        name:     "Okubo",
        address:  "1 Chome Hyakuninchō, Shinjuku-ku, Tōkyō-to 169-0073, Japan",
        point:    GeoPoint::new(35.7010, 139.6990),
        duration: 20.0,
    },
];

pub fn geocoder() -> StaticGeocoder {
    NEIGHBOURHOODS
        .iter()
        .fold(StaticGeocoder::new(), |g, n| g.with(n.address, n.point))
}

pub fn queries(angles: usize) -> Vec<LocationQuery> {
    NEIGHBOURHOODS
        .iter()
        .map(|n| LocationQuery::new(n.name, n.address).duration(n.duration).angles(angles))
        .collect()
}
