//! URL construction helpers.
//!
//! Pure functions so that every request is built the same way.

use url::Url;

use skycast_core::Coordinates;

/// Append `segment` to the base URL's path, preserving any base path prefix.
fn join_path(base: &Url, segment: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{segment}"));
    url
}

/// `{base}/points/{lat},{lon}` with four decimal places.
///
/// weather.gov redirects requests with more precision than that.
pub fn build_points_url(base: &Url, coordinates: Coordinates) -> Url {
    join_path(
        base,
        &format!(
            "points/{:.4},{:.4}",
            coordinates.latitude, coordinates.longitude
        ),
    )
}

/// Common Nominatim parameters, US only, first match.
fn nominatim_search(base: &Url, criteria: &str) -> Url {
    let mut url = join_path(base, "search");
    url.set_query(Some(&format!(
        "{criteria}&countrycodes=us&format=jsonv2&limit=1"
    )));
    url
}

/// Nominatim postal code search.
pub fn build_zip_search_url(base: &Url, zip: &str) -> Url {
    nominatim_search(
        base,
        &format!("postalcode={}", urlencoding::encode(zip.trim())),
    )
}

/// Nominatim structured city/state search.
pub fn build_city_search_url(base: &Url, city: &str, state: &str) -> Url {
    nominatim_search(
        base,
        &format!(
            "city={}&state={}",
            urlencoding::encode(city.trim()),
            urlencoding::encode(state.trim())
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_points_url_rounds_to_four_places() {
        let url = build_points_url(
            &base("https://api.weather.gov"),
            Coordinates::new(40.014_986, -105.270_546),
        );
        assert_eq!(url.as_str(), "https://api.weather.gov/points/40.0150,-105.2705");
    }

    #[test]
    fn test_points_url_keeps_base_path() {
        let url = build_points_url(&base("http://localhost:9000/nws/"), Coordinates::new(1.0, 2.0));
        assert_eq!(url.path(), "/nws/points/1.0000,2.0000");
    }

    #[test]
    fn test_zip_search_url() {
        let url = build_zip_search_url(&base("https://nominatim.openstreetmap.org"), "80302");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?postalcode=80302&countrycodes=us&format=jsonv2&limit=1"
        );
    }

    #[test]
    fn test_city_search_url_encodes_spaces() {
        let url = build_city_search_url(
            &base("https://nominatim.openstreetmap.org"),
            " Salt Lake City ",
            "UT",
        );
        assert_eq!(
            url.query(),
            Some("city=Salt%20Lake%20City&state=UT&countrycodes=us&format=jsonv2&limit=1")
        );
    }
}
