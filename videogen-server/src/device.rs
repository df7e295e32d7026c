/// Device visibility as reported by the environment. The router itself never
/// touches the GPU; the inference workers own it.
#[derive(Clone, Copy, Debug)]
pub struct DeviceInfo {
    pub device: &'static str,
    pub cuda_available: bool,
}

pub fn detect() -> DeviceInfo {
    from_visible_devices(std::env::var("CUDA_VISIBLE_DEVICES").ok().as_deref())
}

fn from_visible_devices(visible: Option<&str>) -> DeviceInfo {
    let cuda_available = visible
        .map(|v| {
            let v = v.trim();
            !v.is_empty() && v != "-1"
        })
        .unwrap_or(false);
    DeviceInfo {
        device: if cuda_available { "cuda" } else { "cpu" },
        cuda_available,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_means_cpu() {
        let info = from_visible_devices(None);
        assert_eq!(info.device, "cpu");
        assert!(!info.cuda_available);
    }

    #[test]
    fn visible_device_means_cuda() {
        let info = from_visible_devices(Some("0"));
        assert_eq!(info.device, "cuda");
        assert!(info.cuda_available);
    }

    #[test]
    fn masked_out_gpu_means_cpu() {
        assert!(!from_visible_devices(Some("-1")).cuda_available);
        assert!(!from_visible_devices(Some("  ")).cuda_available);
    }
}
