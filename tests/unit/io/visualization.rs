//! Tests for walk capture and GIF export

#[cfg(test)]
mod tests {
    use image::{AnimationDecoder, Rgba, RgbaImage};
    use std::fs::File;
    use std::io::BufReader;
    use tilewalk::AlgorithmError;
    use tilewalk::algorithm::resolution::SelectionPolicy;
    use tilewalk::algorithm::rng::SineRng;
    use tilewalk::algorithm::session::{SessionConfig, WalkSession};
    use tilewalk::io::image::SourceImage;
    use tilewalk::io::visualization::WalkCapture;
    use tilewalk::spatial::{Direction, SparseGrid};

    fn source() -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_fn(3, 3, |x, y| {
            Rgba([(x * 100) as u8, (y * 100) as u8, 50, 255])
        }))
    }

    fn captured_walk(source: &SourceImage, moves: &[Direction]) -> WalkCapture {
        let mut session = WalkSession::new(
            source.catalog(),
            SparseGrid::new(),
            SineRng::default(),
            SessionConfig {
                policy: SelectionPolicy::AnchorOnly,
                lookahead: false,
                start: [0, 0],
            },
        );
        let mut capture = WalkCapture::new(moves.len());
        capture.record(&session.start().unwrap());
        for report in session.walk(moves.iter().copied()).unwrap() {
            capture.record(&report);
        }
        capture
    }

    // Tests one frame is recorded per event
    #[test]
    fn test_capture_records_each_event() {
        let source = source();
        let capture = captured_walk(&source, &[Direction::Right, Direction::Left]);

        assert_eq!(capture.frame_count(), 3);
        let frames = capture.frames();
        assert_eq!(frames.first().map(|f| f.generated.len()), Some(1));
        assert_eq!(frames.get(1).map(|f| f.player), Some([1, 0]));
        assert_eq!(frames.get(2).map(|f| f.generated.is_empty()), Some(true));
    }

    // Tests the exported GIF decodes with merged frames plus a hold frame
    #[test]
    fn test_export_gif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("walk.gif");
        let source = source();
        let capture = captured_walk(&source, &[Direction::Down, Direction::Down]);

        capture
            .export_gif(&source.catalog(), &source, 2, &path, 50)
            .unwrap();

        let decoder =
            image::codecs::gif::GifDecoder::new(BufReader::new(File::open(&path).unwrap()))
                .unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        // Three events at full speed, plus the held final frame
        assert_eq!(frames.len(), 4);
        let first = frames.first().unwrap();
        assert_eq!(first.buffer().dimensions(), (2, 6));
    }

    // Tests fast frame delays merge frames
    #[test]
    fn test_export_gif_skips_fast_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fast.gif");
        let source = source();
        let moves = [Direction::Right; 6];
        let capture = captured_walk(&source, &moves);

        capture
            .export_gif(&source.catalog(), &source, 1, &path, 20)
            .unwrap();

        let decoder =
            image::codecs::gif::GifDecoder::new(BufReader::new(File::open(&path).unwrap()))
                .unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        // Seven events, every third kept (0, 3, 6), plus the held final frame
        assert_eq!(frames.len(), 4);
    }

    // Tests an empty capture cannot be exported
    #[test]
    fn test_export_gif_empty_capture() {
        let dir = tempfile::tempdir().unwrap();
        let source = source();
        let capture = WalkCapture::default();

        assert!(matches!(
            capture.export_gif(
                &source.catalog(),
                &source,
                2,
                &dir.path().join("empty.gif"),
                20
            ),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
        assert!(!dir.path().join("empty.gif").exists());
    }
}
