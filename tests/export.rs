use std::io::BufReader;
use std::path::PathBuf;

use image::AnimationDecoder as _;
use gridgif::{CellPos, Frame, FrameSequence, GridgifResult, Rgb8};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "gridgif_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn solid_sequence(colors: &[Rgb8]) -> FrameSequence {
    let frames = (0..colors.len()).map(|_| Frame::new(4, 4)).collect();
    let mut seq = FrameSequence::from_frames(frames);
    for (at, &color) in colors.iter().enumerate() {
        let mut painter = move |_: CellPos| -> GridgifResult<Rgb8> { Ok(color) };
        let ignore: Vec<usize> = (1..=colors.len()).filter(|&p| p != at + 1).collect();
        seq.fill(2, 2, &mut painter, &ignore).unwrap();
    }
    seq
}

#[test]
fn save_writes_stills_and_gif() {
    let root = temp_dir("save_artifacts");

    let seq = solid_sequence(&[Rgb8::BLACK, Rgb8::WHITE]);
    let dir = seq.save_in(&root, "loop").unwrap();

    assert_eq!(dir, root.join("loop-gif"));
    assert!(dir.join("loop1.png").is_file());
    assert!(dir.join("loop2.png").is_file());
    assert!(dir.join("loop.gif").is_file());

    // Stills hold exactly what the frames held, in order.
    let first = image::open(dir.join("loop1.png")).unwrap().to_rgb8();
    assert_eq!(first.dimensions(), (4, 4));
    assert_eq!(first.get_pixel(0, 0).0, [0, 0, 0]);
    let second = image::open(dir.join("loop2.png")).unwrap().to_rgb8();
    assert_eq!(second.get_pixel(0, 0).0, [255, 255, 255]);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn gif_frame_order_matches_sequence_order() {
    let root = temp_dir("gif_order");

    let seq = solid_sequence(&[Rgb8::BLACK, Rgb8::WHITE]);
    let dir = seq.save_in(&root, "flash").unwrap();

    let file = std::fs::File::open(dir.join("flash.gif")).unwrap();
    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(file)).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 2);

    // GIF quantization may wobble a little; dark stays dark, light light.
    let first = frames[0].buffer().get_pixel(0, 0).0;
    let second = frames[1].buffer().get_pixel(0, 0).0;
    assert!(first[0] < 64 && first[1] < 64 && first[2] < 64, "{first:?}");
    assert!(
        second[0] > 192 && second[1] > 192 && second[2] > 192,
        "{second:?}"
    );

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn saving_twice_never_reuses_a_directory() {
    let root = temp_dir("save_twice");

    let seq = solid_sequence(&[Rgb8::WHITE]);
    let first = seq.save_in(&root, "again").unwrap();
    let second = seq.save_in(&root, "again").unwrap();
    let third = seq.save_in(&root, "again").unwrap();

    assert_eq!(first, root.join("again-gif"));
    assert_eq!(second, root.join("again-gif1"));
    assert_eq!(third, root.join("again-gif2"));

    // The first run's artifacts survived the later saves.
    assert!(first.join("again1.png").is_file());
    assert!(first.join("again.gif").is_file());
    assert!(second.join("again.gif").is_file());

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn suffixed_directory_still_gets_base_named_gif() {
    let root = temp_dir("suffixed_name");
    std::fs::create_dir_all(root.join("pulse-gif")).unwrap();

    let seq = solid_sequence(&[Rgb8::WHITE]);
    let dir = seq.save_in(&root, "pulse").unwrap();

    assert_eq!(dir, root.join("pulse-gif1"));
    assert!(dir.join("pulse.gif").is_file());

    std::fs::remove_dir_all(&root).ok();
}
