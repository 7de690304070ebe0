#[cfg(test)]
mod tests {
    use image::GenericImageView;
    use std::io::Cursor;
    use std::path::Path;
    use wraptime::libs::image::{content_type_for, downscale, MediaFile, OUTPUT_CONTENT_TYPE};

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_downscale_caps_longer_side() {
        let file = MediaFile::new("set_photo.png", "image/png", sample_png(64, 48));

        let result = downscale(file, 32, 60).await;

        assert_eq!(result.content_type, OUTPUT_CONTENT_TYPE);
        assert_eq!(result.name, "set_photo.png");
        let decoded = image::load_from_memory(&result.data).unwrap();
        assert_eq!(decoded.dimensions(), (32, 24));
    }

    #[tokio::test]
    async fn test_downscale_portrait_orientation() {
        let file = MediaFile::new("receipt.png", "image/png", sample_png(48, 64));

        let result = downscale(file, 32, 60).await;

        let decoded = image::load_from_memory(&result.data).unwrap();
        assert_eq!(decoded.dimensions(), (24, 32));
    }

    #[tokio::test]
    async fn test_downscale_never_upscales() {
        let file = MediaFile::new("thumb.png", "image/png", sample_png(20, 10));

        let result = downscale(file, 1024, 60).await;

        // Still re-encoded as JPEG, but the dimensions are untouched
        assert_eq!(result.content_type, OUTPUT_CONTENT_TYPE);
        let decoded = image::load_from_memory(&result.data).unwrap();
        assert_eq!(decoded.dimensions(), (20, 10));
    }

    #[tokio::test]
    async fn test_non_image_passes_through() {
        let data = b"date,call,wrap\n2026-08-03,09:00,18:00\n".to_vec();
        let file = MediaFile::new("timesheet.csv", "text/csv", data.clone());

        let result = downscale(file, 1024, 60).await;

        assert_eq!(result.content_type, "text/csv");
        assert_eq!(result.data, data);
    }

    #[tokio::test]
    async fn test_decode_failure_returns_original() {
        // Declared as an image but not decodable
        let data = b"definitely not a png".to_vec();
        let file = MediaFile::new("broken.png", "image/png", data.clone());

        let result = downscale(file, 1024, 60).await;

        assert_eq!(result.content_type, "image/png");
        assert_eq!(result.data, data);
    }

    #[test]
    fn test_content_type_guessing() {
        assert_eq!(content_type_for(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("scan.png")), "image/png");
        assert_eq!(content_type_for(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("no_extension")), "application/octet-stream");
    }
}
