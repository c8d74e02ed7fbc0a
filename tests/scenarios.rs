use rigcheck::data::{CpuAttributes, GpuAttributes};
use rigcheck::{
    evaluate, CpuComponent, GpuComponent, RequirementTier, RequirementsProfile, Tier, UserProfile,
};

fn requirements() -> RequirementsProfile {
    RequirementsProfile::new(
        RequirementTier::new(16000, 9000, 8.0),
        RequirementTier::new(25000, 18000, 16.0),
    )
}

fn known(cpu: u32, gpu: u32, ram_gb: f64) -> UserProfile {
    UserProfile::new(
        CpuComponent::with_score("Test CPU", cpu),
        GpuComponent::with_score("Test GPU", gpu),
        ram_gb,
    )
}

#[test]
fn test_between_tiers_close_to_recommended_is_medium() {
    let result = evaluate(&known(22000, 18000, 16.0), &requirements()).unwrap();

    assert!(result.can_run);
    assert_eq!(result.settings, Tier::Medium);
    let flags = result.details.flags;
    assert!(flags.meets_minimum());
    assert!(!flags.cpu_meets_rec);
    assert!(flags.gpu_meets_rec);
    assert!(flags.ram_meets_rec);
}

#[test]
fn test_below_every_minimum_lists_all_bottlenecks() {
    let result = evaluate(&known(10000, 6000, 4.0), &requirements()).unwrap();

    assert!(!result.can_run);
    assert_eq!(result.settings, Tier::CannotRun);
    assert_eq!(
        result.notes,
        "Hardware below minimum requirements. Bottlenecks: \
         CPU (yours: 10000, need: 16000), \
         GPU (yours: 6000, need: 9000), \
         RAM (yours: 4GB, need: 8GB)"
    );
    assert_eq!(result.details.user_scores.cpu, 10000);
    assert_eq!(result.details.user_scores.gpu, 6000);
    assert_eq!(result.details.user_scores.ram, 4.0);
}

#[test]
fn test_exactly_recommended_is_high() {
    let result = evaluate(&known(25000, 18000, 16.0), &requirements()).unwrap();

    assert!(result.can_run);
    assert_eq!(result.settings, Tier::High);
    assert_eq!(
        result.notes,
        "Your hardware meets or exceeds recommended requirements. Enjoy high settings!"
    );
}

#[test]
fn test_equal_min_and_rec_counts_as_full_gap() {
    // GPU has no range between minimum and recommended
    let reqs = RequirementsProfile::new(
        RequirementTier::new(16000, 9000, 8.0),
        RequirementTier::new(25000, 9000, 16.0),
    );

    // gaps: cpu 0.667, gpu 1.0, ram 0.0
    let result = evaluate(&known(22000, 9000, 8.0), &reqs).unwrap();
    assert_eq!(result.settings, Tier::Medium);

    // gaps: cpu 0.0, gpu 1.0, ram 0.0
    let result = evaluate(&known(16000, 9000, 8.0), &reqs).unwrap();
    assert_eq!(result.settings, Tier::Low);
}

#[test]
fn test_every_dimension_degenerate_and_met_is_high() {
    let tier = RequirementTier::new(16000, 9000, 8.0);
    let reqs = RequirementsProfile::new(tier, tier);
    let result = evaluate(&known(16000, 9000, 8.0), &reqs).unwrap();
    assert_eq!(result.settings, Tier::High);
}

#[test]
fn test_low_when_barely_above_minimum() {
    let result = evaluate(&known(17000, 10000, 8.0), &requirements()).unwrap();
    assert!(result.can_run);
    assert_eq!(result.settings, Tier::Low);
    assert_eq!(
        result.notes,
        "Your hardware meets minimum requirements. Expect low settings for smooth gameplay."
    );
}

#[test]
fn test_named_hardware_resolves_through_tables() {
    let user = UserProfile::new(
        CpuComponent::named("Intel Core i9-13900K"),
        GpuComponent::named("NVIDIA GeForce RTX 4090"),
        32.0,
    );
    let result = evaluate(&user, &requirements()).unwrap();
    assert_eq!(result.details.user_scores.cpu, 45000);
    assert_eq!(result.details.user_scores.gpu, 35000);
    assert_eq!(result.settings, Tier::High);
}

#[test]
fn test_unknown_hardware_is_estimated() {
    let user = UserProfile::new(
        CpuComponent::with_attributes(
            "Engineering Sample",
            CpuAttributes {
                cores: 4,
                clock_speed: 4.0,
            },
        ),
        GpuComponent::with_attributes("Prototype GPU", GpuAttributes { vram_gb: 6.0 }),
        8.0,
    );
    let result = evaluate(&user, &requirements()).unwrap();
    assert_eq!(result.details.user_scores.cpu, 16000);
    assert_eq!(result.details.user_scores.gpu, 9000);
    assert_eq!(result.settings, Tier::Low);
}
