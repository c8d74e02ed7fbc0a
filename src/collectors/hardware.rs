//! Local hardware detection (CPU, GPU, memory) into a `UserProfile`.
//!
//! Names are normalized towards the canonical score table spelling, e.g.
//! `Intel(R) Core(TM) i7-10700K CPU @ 3.80GHz` becomes `Intel Core i7-10700K`.

use crate::data::{CpuAttributes, CpuComponent, GpuAttributes, GpuComponent, UserProfile};
use crate::error::{Result, RigcheckError};
use crate::utils::{command::*, parsing::*};
use std::fs;
use std::path::Path;

/// Detect the local machine (parallelized for speed)
pub fn detect_user_profile() -> Result<UserProfile> {
    let (cpu, (gpu, ram_gb)) = rayon::join(
        detect_cpu,
        || rayon::join(detect_gpu, detect_ram_gb),
    );

    let profile = UserProfile::new(cpu?, gpu, ram_gb?);
    tracing::debug!(cpu = %profile.cpu.name, gpu = %profile.gpu.name, ram_gb = profile.ram_gb, "detected hardware");
    Ok(profile)
}

pub fn detect_cpu() -> Result<CpuComponent> {
    parse_cpuinfo(&fs::read_to_string("/proc/cpuinfo")?)
}

pub fn detect_ram_gb() -> Result<f64> {
    parse_meminfo(&fs::read_to_string("/proc/meminfo")?)
}

/// Primary GPU; an undetectable GPU is resolved by the default score
pub fn detect_gpu() -> GpuComponent {
    let gpus = detect_all_gpus();
    match gpus.into_iter().next() {
        Some(gpu) => gpu.into_component(),
        None => {
            tracing::warn!("no GPU detected");
            GpuComponent::named("Unknown GPU")
        }
    }
}

/// A GPU found on this machine
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedGpu {
    pub name: String,
    pub integrated: bool,
    pub vram_gb: Option<f64>,
}

impl DetectedGpu {
    fn into_component(self) -> GpuComponent {
        match self.vram_gb {
            Some(vram_gb) => GpuComponent::with_attributes(self.name, GpuAttributes { vram_gb }),
            None => GpuComponent::named(self.name),
        }
    }
}

/// Parse `/proc/cpuinfo` content
pub fn parse_cpuinfo(content: &str) -> Result<CpuComponent> {
    let mut model_name = None;
    let mut physical_cores = None;
    let mut mhz = None;
    let mut processors: u32 = 0;

    for line in content.lines() {
        if line.starts_with("processor") {
            processors += 1;
        } else if model_name.is_none() && line.starts_with("model name") {
            model_name = extract_after_colon(line);
        } else if physical_cores.is_none() && line.starts_with("cpu cores") {
            physical_cores = extract_after_colon(line).and_then(|v| v.parse::<u32>().ok());
        } else if mhz.is_none() && line.starts_with("cpu MHz") {
            mhz = extract_after_colon(line).and_then(|v| v.parse::<f64>().ok());
        }
    }

    let raw_name = model_name
        .ok_or_else(|| RigcheckError::Detection("CPU info not found".to_string()))?;

    // Rated clock from the brand string beats the momentary `cpu MHz`
    let clock_speed = parse_rated_ghz(&raw_name).or(mhz.map(|m| m / 1000.0));
    let cores = physical_cores.unwrap_or(processors);
    let name = normalize_cpu_name(&raw_name);

    Ok(match clock_speed {
        Some(clock_speed) if cores > 0 => {
            CpuComponent::with_attributes(name, CpuAttributes { cores, clock_speed })
        }
        _ => CpuComponent::named(name),
    })
}

/// Parse `MemTotal` from `/proc/meminfo` content, in GB
pub fn parse_meminfo(content: &str) -> Result<f64> {
    let total_kb = content
        .lines()
        .find(|line| line.starts_with("MemTotal"))
        .and_then(extract_after_colon)
        .ok_or_else(|| RigcheckError::Detection("MemTotal not found".to_string()))?;

    kb_to_gb(total_kb.trim_end_matches("kB"))
}

/// Strip vendor decorations so the name can match a score table entry
pub fn normalize_cpu_name(raw: &str) -> String {
    let cleaned = raw.replace("(R)", "").replace("(TM)", "").replace("(tm)", "");
    let cleaned = cleaned.split(" CPU @").next().unwrap_or(&cleaned);
    let cleaned = cleaned.split(" @ ").next().unwrap_or(cleaned);

    let mut words: Vec<&str> = cleaned.split_whitespace().collect();
    // "AMD Ryzen 5 5600X 6-Core Processor"
    if words.last() == Some(&"Processor") {
        words.pop();
        if words.last().is_some_and(|w| w.ends_with("-Core")) {
            words.pop();
        }
    }
    if words.last() == Some(&"CPU") {
        words.pop();
    }
    words.join(" ")
}

fn parse_rated_ghz(model_name: &str) -> Option<f64> {
    let (_, after) = model_name.rsplit_once('@')?;
    after.trim().trim_end_matches("GHz").trim().parse().ok()
}

/// All GPUs, discrete first
pub fn detect_all_gpus() -> Vec<DetectedGpu> {
    // sysfs only knows names for some drivers
    let mut gpus = detect_sysfs_gpus();

    if gpus.is_empty() && command_exists("lspci") {
        if let Ok(output) = run_command("lspci", &[]) {
            gpus = output.lines().filter_map(parse_lspci_line).collect();
        }
    }

    gpus.sort_by_key(|gpu| gpu.integrated);
    gpus
}

fn detect_sysfs_gpus() -> Vec<DetectedGpu> {
    let mut gpus = Vec::new();
    let Ok(entries) = fs::read_dir("/sys/class/drm") else {
        return gpus;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(card) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !card.starts_with("card") || card.contains('-') {
            continue;
        }
        if let Ok(device_name) = fs::read_to_string(path.join("device/name")) {
            let name = device_name.trim();
            if !name.is_empty() {
                gpus.push(DetectedGpu {
                    name: name.to_string(),
                    integrated: is_integrated_gpu(&path),
                    vram_gb: read_sysfs_vram_gb(&path),
                });
            }
        }
    }
    gpus
}

fn is_integrated_gpu(card_path: &Path) -> bool {
    // Intel GPUs are usually integrated
    fs::read_to_string(card_path.join("device/vendor"))
        .map(|vendor| vendor.trim() == "0x8086")
        .unwrap_or(false)
}

// amdgpu exposes total VRAM in bytes
fn read_sysfs_vram_gb(card_path: &Path) -> Option<f64> {
    let bytes: u64 = fs::read_to_string(card_path.join("device/mem_info_vram_total"))
        .ok()?
        .trim()
        .parse()
        .ok()?;
    Some(bytes as f64 / 1_073_741_824.0) // 1024^3
}

/// Parse one `lspci` line; non-display devices yield `None`
pub fn parse_lspci_line(line: &str) -> Option<DetectedGpu> {
    let is_display = line.contains("VGA compatible controller")
        || line.contains("3D controller")
        || line.contains("Display controller");
    if !is_display {
        return None;
    }

    let (_, description) = line.split_once(": ")?;
    let description = description.split(" (rev ").next().unwrap_or(description).trim();
    let name = canonical_gpu_name(description)?;
    let integrated = is_integrated_name(&name);

    Some(DetectedGpu {
        name,
        integrated,
        vram_gb: None,
    })
}

/// Map an lspci device description to score table spelling
pub fn canonical_gpu_name(description: &str) -> Option<String> {
    let brackets = bracket_contents(description);

    if description.contains("NVIDIA") {
        let model = brackets
            .iter()
            .copied()
            .find(|b| b.contains("GeForce") || b.contains("RTX") || b.contains("GTX"))?;
        let model = model.replace(" Lite Hash Rate", "");
        return Some(if model.starts_with("GeForce") {
            format!("NVIDIA {}", model)
        } else {
            format!("NVIDIA GeForce {}", model)
        });
    }

    if description.contains("AMD") || description.contains("Advanced Micro Devices") {
        let model = brackets.iter().copied().find(|b| b.contains("Radeon"))?;
        let model = model.split(" / ").next().unwrap_or(model).trim();
        return Some(format!("AMD {}", model));
    }

    if description.contains("Intel") {
        if let Some(model) = brackets.iter().find(|b| b.contains("Graphics") || b.contains("Arc")) {
            return Some(format!("Intel {}", model));
        }
        let cleaned = description.replace("Intel Corporation ", "");
        let model = cleaned.split(" [").next().unwrap_or(&cleaned).trim();
        return Some(format!("Intel {}", model));
    }

    brackets
        .last()
        .map(|b| b.to_string())
        .or_else(|| Some(description.to_string()))
}

fn bracket_contents(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('[') {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        found.push(&rest[start + 1..start + len]);
        rest = &rest[start + len + 1..];
    }
    found
}

fn is_integrated_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    ["uhd", "hd graphics", "iris", "raphael", "renoir", "cezanne"]
        .iter()
        .any(|marker| lower.contains(marker))
}
