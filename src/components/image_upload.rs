//! Image picker
//!
//! Native file dialog, decode, optional square crop for avatars, PNG
//! re-encode. The caller receives the encoded bytes and decides which
//! bucket they go to.

use dioxus::prelude::*;
use image::{DynamicImage, GenericImageView, ImageFormat};
use rfd::FileDialog;

/// How the picked image is cropped before upload
#[derive(Clone, Copy, PartialEq)]
pub enum CropMode {
    /// Keep the full frame (post covers)
    Full,
    /// Center-crop to a square (avatars)
    Square,
}

#[component]
pub fn ImageUpload(
    /// Crop applied before encoding
    #[props(default = CropMode::Full)]
    crop: CropMode,
    /// Callback with (file name, PNG bytes) once a file is picked
    on_picked: EventHandler<(String, Vec<u8>)>,
    /// Button label
    #[props(default = "Choose image".to_string())]
    label: String,
) -> Element {
    let mut working = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        working.set(true);
        error.set(None);

        spawn(async move {
            // The dialog blocks, so it runs off the UI thread.
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match image::open(&path) {
                    Ok(img) => {
                        let img = match crop {
                            CropMode::Full => img,
                            CropMode::Square => crop_square(img),
                        };
                        let mut buffer = Vec::new();
                        match img.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
                        {
                            Ok(_) => {
                                let name = path
                                    .file_stem()
                                    .and_then(|n| n.to_str())
                                    .unwrap_or("image")
                                    .to_string();
                                working.set(false);
                                on_picked.call((format!("{}.png", name), buffer));
                            }
                            Err(e) => {
                                error.set(Some(format!("Failed to encode: {}", e)));
                                working.set(false);
                            }
                        }
                    }
                    Err(e) => {
                        error.set(Some(format!("Failed to load image: {}", e)));
                        working.set(false);
                    }
                },
                Ok(None) => {
                    // User cancelled
                    working.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {}", e)));
                    working.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "image-upload",
            button {
                class: "btn-ghost",
                onclick: handle_pick,
                disabled: working(),
                if working() { "Processing..." } else { "{label}" }
            }
            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
        }
    }
}

/// Center-crop an image to a square.
fn crop_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;
    img.crop_imm(x, y, side, side)
}
