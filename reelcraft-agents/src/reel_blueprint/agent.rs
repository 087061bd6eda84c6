use std::collections::HashSet;

use shared_types::{ReelBlueprint, ReelBrief, ScriptBeat};

use crate::reel_blueprint::platforms::{resolve_platform, PlatformPlaybook};
use crate::reel_blueprint::tones::{resolve_tone, ToneProfile};

/// Composes a reel blueprint from a brief.
///
/// Deterministic and side-effect free: the same brief always produces
/// the same blueprint, and no input string can make composition fail.
pub fn generate_blueprint(brief: &ReelBrief) -> ReelBlueprint {
    let composer = BlueprintComposer::for_brief(brief);

    tracing::debug!(
        "Composing blueprint: tone profile {:?}, platform playbook {:?}",
        composer.tone.name,
        composer.platform.name
    );

    composer.compose(brief)
}

struct BlueprintComposer {
    tone: &'static ToneProfile,
    platform: &'static PlatformPlaybook,
}

impl BlueprintComposer {
    fn for_brief(brief: &ReelBrief) -> Self {
        Self {
            tone: resolve_tone(&brief.tone),
            platform: resolve_platform(&brief.platform),
        }
    }

    fn compose(&self, brief: &ReelBrief) -> ReelBlueprint {
        ReelBlueprint {
            summary: self.summary(brief),
            hook: self.hook(brief),
            script_beats: self.script_beats(brief),
            call_to_action: self.call_to_action(brief),
            caption: self.caption(brief),
            hashtags: self.hashtags(brief),
            production_checklist: self.production_checklist(brief),
            metrics_dashboard: self.metrics_dashboard(brief),
            distribution_plan: self.distribution_plan(brief),
        }
    }

    fn summary(&self, brief: &ReelBrief) -> String {
        format!(
            "A {} reel concept taking {} to {} on {}. Mission: {}. Payoff on screen: {}. Runs {} in {}.",
            self.tone.register,
            brief.topic,
            brief.audience,
            brief.platform,
            brief.goal,
            brief.offer,
            self.platform.runtime,
            self.platform.aspect,
        )
    }

    fn hook(&self, brief: &ReelBrief) -> String {
        fill(self.tone.hook_template, brief)
    }

    fn script_beats(&self, brief: &ReelBrief) -> Vec<ScriptBeat> {
        vec![
            ScriptBeat {
                title: "Hook".to_string(),
                content: format!(
                    "{} Delivery: {}.",
                    self.hook(brief),
                    self.tone.opener_direction
                ),
            },
            ScriptBeat {
                title: "Context Shift".to_string(),
                content: format!(
                    "Name the wall {} keep hitting and tie it to {}. One concrete sentence per cut, no throat-clearing.",
                    brief.audience, brief.goal
                ),
            },
            ScriptBeat {
                title: "Value Drop".to_string(),
                content: format!(
                    "Walk through the core of {} in three tight steps, each one something the viewer can act on today.",
                    brief.topic
                ),
            },
            ScriptBeat {
                title: "Proof and Payoff".to_string(),
                content: format!(
                    "Show the receipt: what changes for {} once {} is in play. One visual, one number, one face.",
                    brief.audience, brief.offer
                ),
            },
            ScriptBeat {
                title: "Call To Action".to_string(),
                content: self.call_to_action(brief),
            },
        ]
    }

    fn call_to_action(&self, brief: &ReelBrief) -> String {
        format!(
            "{}: {} is open for {}. Comment or tap the link before this one leaves the feed.",
            self.tone.cta_lead, brief.offer, brief.audience
        )
    }

    fn caption(&self, brief: &ReelBrief) -> String {
        fill(self.tone.caption_template, brief)
    }

    fn hashtags(&self, brief: &ReelBrief) -> Vec<String> {
        let mut tags = topic_tags(&brief.topic);
        tags.extend(self.tone.seed_tags.iter().map(|tag| format!("#{}", tag)));
        tags.extend(self.platform.seed_tags.iter().map(|tag| format!("#{}", tag)));
        dedupe(tags)
    }

    fn production_checklist(&self, brief: &ReelBrief) -> Vec<String> {
        dedupe(vec![
            format!(
                "Lock the shoot format: {}, target runtime {}.",
                self.platform.aspect, self.platform.runtime
            ),
            format!("Edit rhythm: {}.", self.tone.pacing),
            format!(
                "Record the hook twice and keep the sharper take. Direction: {}.",
                self.tone.opener_direction
            ),
            "Burn in captions for sound-off viewing.".to_string(),
            format!(
                "Prepare an end card for {} with one clear next step.",
                brief.offer
            ),
            format!("Line up {} before publishing.", self.platform.native_feature),
        ])
    }

    fn metrics_dashboard(&self, brief: &ReelBrief) -> Vec<String> {
        let mut metrics: Vec<String> = self
            .platform
            .metrics
            .iter()
            .map(|metric| metric.to_string())
            .collect();
        metrics.push(format!("North star: {}.", brief.goal));
        dedupe(metrics)
    }

    fn distribution_plan(&self, brief: &ReelBrief) -> Vec<String> {
        dedupe(vec![
            format!(
                "Publish natively on {}; {}.",
                brief.platform, self.platform.algorithm_note
            ),
            format!(
                "Repurpose within 48 hours into {}.",
                self.platform.repurpose_targets[0]
            ),
            format!(
                "Repurpose within the week into {}.",
                self.platform.repurpose_targets[1]
            ),
            "Reply to every comment in the first hour to feed early engagement.".to_string(),
            format!("Reuse the caption as an email teaser for {}.", brief.offer),
        ])
    }
}

/// Fills the brief's fields into a template's `{field}` markers.
fn fill(template: &str, brief: &ReelBrief) -> String {
    template
        .replace("{topic}", &brief.topic)
        .replace("{goal}", &brief.goal)
        .replace("{audience}", &brief.audience)
        .replace("{offer}", &brief.offer)
        .replace("{platform}", &brief.platform)
}

/// Derives hashtag candidates from the topic's significant words.
fn topic_tags(topic: &str) -> Vec<String> {
    const FILLER: [&str; 12] = [
        "the", "and", "for", "with", "your", "from", "this", "that", "into", "over", "what",
        "about",
    ];

    topic
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(|word| word.to_ascii_lowercase())
        .filter(|word| word.len() > 3 && !FILLER.contains(&word.as_str()))
        .take(3)
        .map(|word| format!("#{}", word))
        .collect()
}

/// Drops repeated items, preserving first-occurrence order.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
