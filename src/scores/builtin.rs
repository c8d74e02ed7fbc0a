//! Bundled benchmark scores. Higher is faster; values are comparable only
//! within their own category.

pub const CPU_SCORES: &[(&str, u32)] = &[
    // Intel
    ("Intel Core i9-13900K", 45000),
    ("Intel Core i7-13700K", 38000),
    ("Intel Core i5-13600K", 32000),
    ("Intel Core i9-12900K", 40000),
    ("Intel Core i7-12700K", 35000),
    ("Intel Core i5-12600K", 28000),
    ("Intel Core i7-11700K", 25000),
    ("Intel Core i5-11600K", 20000),
    ("Intel Core i7-10700K", 22000),
    ("Intel Core i5-10400", 15000),
    ("Intel Core i3-10100", 10000),
    // AMD
    ("AMD Ryzen 9 7950X", 48000),
    ("AMD Ryzen 9 7900X", 42000),
    ("AMD Ryzen 7 7700X", 35000),
    ("AMD Ryzen 5 7600X", 28000),
    ("AMD Ryzen 9 5950X", 38000),
    ("AMD Ryzen 9 5900X", 35000),
    ("AMD Ryzen 7 5800X", 28000),
    ("AMD Ryzen 5 5600X", 22000),
    ("AMD Ryzen 7 3700X", 20000),
    ("AMD Ryzen 5 3600", 16000),
    ("AMD Ryzen 3 3300X", 12000),
];

// Roughly 3DMark-scaled
pub const GPU_SCORES: &[(&str, u32)] = &[
    // NVIDIA RTX 40
    ("NVIDIA GeForce RTX 4090", 35000),
    ("NVIDIA GeForce RTX 4080", 28000),
    ("NVIDIA GeForce RTX 4070 Ti", 24000),
    ("NVIDIA GeForce RTX 4070", 20000),
    ("NVIDIA GeForce RTX 4060 Ti", 16000),
    ("NVIDIA GeForce RTX 4060", 14000),
    // NVIDIA RTX 30
    ("NVIDIA GeForce RTX 3090", 25000),
    ("NVIDIA GeForce RTX 3080", 22000),
    ("NVIDIA GeForce RTX 3070", 18000),
    ("NVIDIA GeForce RTX 3060 Ti", 15000),
    ("NVIDIA GeForce RTX 3060", 13000),
    ("NVIDIA GeForce RTX 3050", 10000),
    // NVIDIA GTX 16
    ("NVIDIA GeForce GTX 1660 Ti", 9000),
    ("NVIDIA GeForce GTX 1660", 8000),
    ("NVIDIA GeForce GTX 1650", 6000),
    // AMD RX 7000
    ("AMD Radeon RX 7900 XTX", 30000),
    ("AMD Radeon RX 7900 XT", 26000),
    ("AMD Radeon RX 7800 XT", 22000),
    ("AMD Radeon RX 7700 XT", 18000),
    ("AMD Radeon RX 7600", 14000),
    // AMD RX 6000
    ("AMD Radeon RX 6900 XT", 23000),
    ("AMD Radeon RX 6800 XT", 20000),
    ("AMD Radeon RX 6700 XT", 16000),
    ("AMD Radeon RX 6600 XT", 12000),
    ("AMD Radeon RX 6600", 10000),
    ("AMD Radeon RX 6500 XT", 7000),
];
