use pmoxspf::{
    MemoryLibrary, PlaylistParser, TrackKind, TrackRecord, XspfConfig, XspfParser, try_magic,
};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn sample_streams() -> Vec<TrackRecord> {
    vec![
        TrackRecord::stream("http://radio.example/main.mp3")
            .with_title("Main Mix")
            .with_artist("Radio <Example>")
            .with_album("Live & Loud")
            .with_duration(Duration::from_millis(183_456)),
        TrackRecord::stream("https://cdn.example/track?id=42&fmt=flac").with_title("  spaced  "),
        TrackRecord::stream("http://radio.example/jingle").with_duration(Duration::from_secs(0)),
    ]
}

#[test]
fn save_then_load_keeps_text_fields_and_locations() -> anyhow::Result<()> {
    let parser = XspfParser::new();
    let original = sample_streams();

    let mut xml = Vec::new();
    parser.save(&original, &mut xml, Path::new(""))?;
    let loaded = parser.load(xml.as_slice(), Path::new(""));

    assert_eq!(loaded.len(), original.len());
    for (before, after) in original.iter().zip(&loaded) {
        assert_eq!(after.location, before.location);
        assert_eq!(after.title, before.title);
        assert_eq!(after.artist, before.artist);
        assert_eq!(after.album, before.album);
        assert_eq!(after.kind(), Some(TrackKind::Stream));
    }

    // Durées relues à la seconde près
    assert_eq!(loaded[0].duration, Some(Duration::from_secs(183)));
    assert_eq!(loaded[1].duration, None);
    assert_eq!(loaded[2].duration, Some(Duration::ZERO));

    Ok(())
}

#[test]
fn compact_and_indented_documents_load_identically() -> anyhow::Result<()> {
    let mut compact_config = XspfConfig::default();
    compact_config.writer.indent = None;
    let compact = XspfParser::with_config(pmoxspf::NoLibrary, compact_config);
    let indented = XspfParser::new();

    let tracks = sample_streams();
    let mut a = Vec::new();
    let mut b = Vec::new();
    compact.save(&tracks, &mut a, Path::new(""))?;
    indented.save(&tracks, &mut b, Path::new(""))?;

    assert_ne!(a, b);
    assert_eq!(
        compact.load(a.as_slice(), Path::new("")),
        indented.load(b.as_slice(), Path::new(""))
    );
    Ok(())
}

#[test]
fn files_round_trip_through_library() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let song = dir.path().join("01 - Intro.flac");
    let gone = dir.path().join("02 - Deleted.flac");
    fs::write(&song, b"fLaC")?;

    let cataloged = TrackRecord::from_file(&song)
        .with_title("Intro")
        .with_artist("Artist")
        .with_album("Debut")
        .with_duration(Duration::from_secs(95));

    let mut library = MemoryLibrary::new();
    library.insert(song.clone(), cataloged.clone());
    let parser = XspfParser::with_library(&library);

    let playlist = dir.path().join("list.xspf");
    let tracks = vec![
        cataloged.clone(),
        TrackRecord::from_file(&gone).with_title("Deleted"),
        TrackRecord::stream("http://radio.example/live").with_title("Radio"),
    ];
    parser.save_file(&tracks, &playlist)?;

    let head = fs::read(&playlist)?;
    assert!(try_magic(&head));

    let loaded = parser.load_file(&playlist)?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], cataloged);
    assert_eq!(loaded[1].title, "Radio");

    Ok(())
}

#[test]
fn unknown_file_is_rebuilt_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let song = dir.path().join("track.ogg");
    fs::write(&song, b"OggS")?;

    let playlist = dir.path().join("list.xspf");
    let parser = XspfParser::new();
    parser.save_file(&[TrackRecord::from_file(&song).with_title("From XSPF")], &playlist)?;

    let loaded = parser.load_file(&playlist)?;
    assert_eq!(loaded, vec![TrackRecord::from_file(&song)]);
    Ok(())
}

#[test]
fn third_party_document_is_loaded() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported by another player -->
<playlist version="1" xmlns="http://xspf.org/ns/0/" xmlns:vlc="http://www.videolan.org/vlc/playlist/ns/0/">
  <title>Playlist</title>
  <trackList>
    <track>
      <location>http://stream.example.org:8000/jazz</location>
      <title>Jazz &#38; Blues</title>
      <duration>abc</duration>
      <extension application="http://www.videolan.org/vlc/playlist/0">
        <vlc:id>0</vlc:id>
      </extension>
    </track>
    <track>
      <location>http://stream.example.org:8000/rock</location>
      <creator>DJ</creator>
      <duration>61999</duration>
    </track>
  </trackList>
  <extension application="http://www.videolan.org/vlc/playlist/0">
    <vlc:item tid="0"/>
  </extension>
</playlist>"#;

    assert!(try_magic(xml.as_bytes()));

    let tracks = XspfParser::new().load(xml.as_bytes(), Path::new(""));
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Jazz & Blues");
    assert_eq!(tracks[0].duration, None);
    assert_eq!(tracks[1].artist, "DJ");
    assert_eq!(tracks[1].duration_secs(), Some(61));
}

#[test]
fn missing_playlist_file_is_an_io_error() {
    let err = XspfParser::new()
        .load_file("/nonexistent/dir/list.xspf")
        .unwrap_err();
    assert!(matches!(err, pmoxspf::Error::Io(_)));
}

#[test]
fn parser_is_usable_through_the_common_interface() -> anyhow::Result<()> {
    let parsers: Vec<Box<dyn PlaylistParser>> = vec![Box::new(XspfParser::new())];
    let data = br#"<playlist><trackList><track><location>http://a/b</location></track></trackList></playlist>"#;

    let parser = parsers
        .iter()
        .find(|p| p.try_magic(data))
        .expect("XSPF parser should claim the document");

    let mut input: &[u8] = data;
    let tracks = parser.load(&mut input, Path::new(""));
    assert_eq!(tracks, vec![TrackRecord::stream("http://a/b")]);

    let mut out = Vec::new();
    parser.save(&tracks, &mut out, Path::new(""))?;
    assert!(String::from_utf8(out)?.contains("<location>http://a/b</location>"));
    Ok(())
}

#[test]
fn sub_millisecond_durations_survive_a_round_trip() -> anyhow::Result<()> {
    let parser = XspfParser::new();
    let track = TrackRecord::stream("http://radio.example/main.mp3")
        .with_title("Fractional")
        .with_duration(Duration::from_nanos(183_456_500_000));

    let mut xml = Vec::new();
    parser.save(std::slice::from_ref(&track), &mut xml, Path::new(""))?;
    assert!(String::from_utf8(xml.clone())?.contains("<duration>183456.5</duration>"));

    let loaded = parser.load(xml.as_slice(), Path::new(""));
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].duration_secs(), Some(183));
    Ok(())
}

#[test]
fn default_parsers_load_and_save() -> anyhow::Result<()> {
    let xml = br#"<playlist><trackList><track><location>http://a/b</location><duration>3000</duration></track></trackList></playlist>"#;
    let expected = vec![TrackRecord::stream("http://a/b").with_duration(Duration::from_secs(3))];

    assert_eq!(XspfParser::new().load(&xml[..], Path::new("")), expected);
    assert_eq!(XspfParser::default().load(&xml[..], Path::new("")), expected);

    let library = MemoryLibrary::new();
    let with_library = XspfParser::with_library(&library);
    assert_eq!(with_library.load(&xml[..], Path::new("")), expected);

    let mut out = Vec::new();
    with_library.save(&expected, &mut out, Path::new(""))?;
    assert_eq!(XspfParser::default().load(out.as_slice(), Path::new("")), expected);
    Ok(())
}
