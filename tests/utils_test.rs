use image::Rgb;
use spotpaper::types::{BackgroundMode, SourceMode, TrackInfo};
use spotpaper::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256 is 32 bytes, 43 characters in unpadded base64
    assert_eq!(challenge.len(), 43);

    // Deterministic for the same verifier
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe alphabet, no padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_code_challenge_known_vector() {
    // Example from RFC 7636, appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_build_authorize_url() {
    let url = build_authorize_url(
        "https://accounts.spotify.com/authorize",
        "client",
        "http://127.0.0.1:8888/callback",
        "challenge",
        "user-library-read",
    );

    assert!(url.starts_with("https://accounts.spotify.com/authorize?client_id=client&"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("code_challenge=challenge&code_challenge_method=S256"));
    assert!(url.ends_with("scope=user-library-read"));
}

#[test]
fn test_wallpaper_file_name_keeps_title() {
    assert_eq!(wallpaper_file_name("Song A"), "Song A.png");
    assert_eq!(wallpaper_file_name("Mr. Brightside"), "Mr. Brightside.png");
}

#[test]
fn test_parse_background_modes() {
    assert_eq!(
        "average".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Average)
    );
    assert_eq!(
        "Blurred".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Blurred)
    );
    assert_eq!(
        "blured".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Blurred)
    );
    assert_eq!(
        "grain".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Grain)
    );
    assert_eq!(
        "255,0,0".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Color(Rgb([255, 0, 0])))
    );
    assert_eq!(
        "(1, 2, 3)".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Color(Rgb([1, 2, 3])))
    );
    assert_eq!(
        "#1E90ff".parse::<BackgroundMode>(),
        Ok(BackgroundMode::Color(Rgb([0x1e, 0x90, 0xff])))
    );
}

#[test]
fn test_parse_background_rejects_garbage() {
    for input in ["", "plaid", "256,0,0", "1,2", "#12345", "#gg0000", "1,2,3,4"] {
        assert!(
            input.parse::<BackgroundMode>().is_err(),
            "{input:?} should not parse"
        );
    }
}

#[test]
fn test_background_mode_display_round_trips_colors() {
    let mode = BackgroundMode::Color(Rgb([12, 34, 56]));
    assert_eq!(mode.to_string(), "12,34,56");
    assert_eq!(mode.to_string().parse::<BackgroundMode>(), Ok(mode));
}

#[test]
fn test_parse_source_modes() {
    assert_eq!("liked".parse::<SourceMode>(), Ok(SourceMode::Liked));
    assert_eq!("PLAYLIST".parse::<SourceMode>(), Ok(SourceMode::Playlist));
    assert_eq!("artist".parse::<SourceMode>(), Ok(SourceMode::Artist));
    assert!("album".parse::<SourceMode>().is_err());
}

#[test]
fn test_parse_track_info() {
    assert_eq!("none".parse::<TrackInfo>(), Ok(TrackInfo::None));
    assert_eq!("Artist".parse::<TrackInfo>(), Ok(TrackInfo::Artist));
    assert_eq!("track".parse::<TrackInfo>(), Ok(TrackInfo::Track));
    assert_eq!(
        "artist-a-track".parse::<TrackInfo>(),
        Ok(TrackInfo::ArtistAndTrack)
    );
    assert_eq!(TrackInfo::ArtistAndTrack.to_string(), "artist-a-track");

    // Only the hyphenated spelling is accepted.
    assert!("artist and track".parse::<TrackInfo>().is_err());
    assert!("album".parse::<TrackInfo>().is_err());
}
