/// Distribution playbook for one short-form channel.
pub struct PlatformPlaybook {
    pub name: &'static str,
    pub runtime: &'static str,
    pub aspect: &'static str,
    pub native_feature: &'static str,
    pub algorithm_note: &'static str,
    pub metrics: [&'static str; 3],
    pub repurpose_targets: [&'static str; 2],
    pub seed_tags: [&'static str; 2],
}

static PLATFORM_PLAYBOOKS: [PlatformPlaybook; 5] = [
    PlatformPlaybook {
        name: "Instagram Reels",
        runtime: "30 to 45 seconds",
        aspect: "9:16 vertical with the safe zone clear of the caption bar",
        native_feature: "trending audio and collab posting",
        algorithm_note: "Reels distribution leans on shares and saves from non-followers",
        metrics: [
            "Reach from non-followers",
            "Saves per thousand views",
            "Profile visits from the reel",
        ],
        repurpose_targets: [
            "Instagram Stories with a poll sticker",
            "the feed as a carousel of script beats",
        ],
        seed_tags: ["reels", "instagram"],
    },
    PlatformPlaybook {
        name: "TikTok",
        runtime: "21 to 34 seconds",
        aspect: "9:16 vertical with hook text inside the top third",
        native_feature: "stitches, duets and reply-to-comment videos",
        algorithm_note: "the For You page rewards rewatches and completion rate above all",
        metrics: [
            "Completion rate",
            "Rewatch count",
            "Follower conversion from the video",
        ],
        repurpose_targets: [
            "a reply-to-comment follow-up video",
            "a photo-mode carousel recap",
        ],
        seed_tags: ["tiktok", "fyp"],
    },
    PlatformPlaybook {
        name: "YouTube Shorts",
        runtime: "under 60 seconds",
        aspect: "9:16 vertical with a title-safe top banner",
        native_feature: "pinned comments and the related video link",
        algorithm_note: "the Shorts feed optimizes for the viewed-versus-swiped ratio",
        metrics: [
            "Viewed versus swiped ratio",
            "Average percentage viewed",
            "Subscribers gained per Short",
        ],
        repurpose_targets: [
            "a long-form YouTube breakdown",
            "the community tab as an image post",
        ],
        seed_tags: ["shorts", "youtube"],
    },
    PlatformPlaybook {
        name: "Facebook Reels",
        runtime: "20 to 30 seconds",
        aspect: "9:16 vertical with large readable text overlays",
        native_feature: "group sharing and the remix option",
        algorithm_note: "Facebook distribution compounds through shares into groups",
        metrics: [
            "Shares into groups",
            "Three-second view rate",
            "Page follows from the reel",
        ],
        repurpose_targets: [
            "relevant Facebook groups",
            "a page story with a tap-through prompt",
        ],
        seed_tags: ["facebookreels", "facebook"],
    },
    PlatformPlaybook {
        name: "LinkedIn Video",
        runtime: "45 to 75 seconds",
        aspect: "9:16 or square, captions always on",
        native_feature: "document posts and newsletter cross-promotion",
        algorithm_note: "LinkedIn rewards comments and dwell time from first-degree connections",
        metrics: [
            "Comment rate from target titles",
            "Dwell time",
            "Connection requests after posting",
        ],
        repurpose_targets: [
            "a text-first LinkedIn post reusing the hook",
            "a document post of the production checklist",
        ],
        seed_tags: ["linkedin", "b2b"],
    },
];

static DEFAULT_PLATFORM: PlatformPlaybook = PlatformPlaybook {
    name: "default",
    runtime: "30 to 45 seconds",
    aspect: "9:16 vertical",
    native_feature: "native text overlays and captions",
    algorithm_note: "short-form feeds reward early retention and shares",
    metrics: [
        "Three-second hold rate",
        "Completion rate",
        "Shares per thousand views",
    ],
    repurpose_targets: [
        "your next-best short-form channel",
        "an email or newsletter feature",
    ],
    seed_tags: ["shortform", "video"],
};

/// Resolves a platform string to its playbook, falling back to a
/// platform-neutral default for values outside the known channels.
pub fn resolve_platform(platform: &str) -> &'static PlatformPlaybook {
    let wanted = platform.trim();
    PLATFORM_PLAYBOOKS
        .iter()
        .find(|playbook| playbook.name.eq_ignore_ascii_case(wanted))
        .unwrap_or_else(|| {
            tracing::debug!("Unknown platform {:?}, using the default playbook", platform);
            &DEFAULT_PLATFORM
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms_resolve_by_name() {
        for name in [
            "Instagram Reels",
            "TikTok",
            "YouTube Shorts",
            "Facebook Reels",
            "LinkedIn Video",
        ] {
            assert_eq!(resolve_platform(name).name, name);
        }
    }

    #[test]
    fn test_resolution_ignores_case() {
        assert_eq!(resolve_platform("tiktok").name, "TikTok");
        assert_eq!(resolve_platform("instagram reels").name, "Instagram Reels");
    }

    #[test]
    fn test_unknown_platform_falls_back_to_default() {
        assert_eq!(resolve_platform("Snapchat Spotlight").name, "default");
    }
}
