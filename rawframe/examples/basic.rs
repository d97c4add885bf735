use rawframe::formats::{Nv12Buffer, RawFrame, RgbSliceU8};
use rawframe::{Error, PixelFormat, convert};

fn main() -> Result<(), Error> {
    let (width, height) = (64, 48);
    let rgb: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let (x, y) = (i % width, i / width);
            [(x * 4) as u8, (y * 5) as u8, 128]
        })
        .collect();

    let source = RgbSliceU8::new(&rgb, (width, height))?;

    // Either go through the format dispatch ...
    let format: PixelFormat = "nv12".parse()?;
    let raw = convert(source, format);

    // ... or use a packer directly to get at the individual planes.
    let nv12 = Nv12Buffer::from_rgb_source(source);

    assert_eq!(raw, nv12.as_bytes());
    println!("{format}: {} bytes, Y plane {} bytes, UV plane {} bytes", raw.len(), nv12.y().len(), nv12.uv().len());

    Ok(())
}
