use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

/// Picks the compute device for model inference.
///
/// GPU backends are tried in feature order (Metal, then CUDA); anything that
/// fails to initialize falls through to CPU. Shared by the embedder and the
/// NER head so both always land on the same device.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable, falling back"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable, falling back"),
    }

    Device::Cpu
}
