/// Creative direction for one energy mode.
///
/// Templates use `{topic}`, `{goal}`, `{audience}`, `{offer}` and
/// `{platform}` markers, filled from the brief at composition time.
pub struct ToneProfile {
    pub name: &'static str,
    pub register: &'static str,
    pub hook_template: &'static str,
    pub opener_direction: &'static str,
    pub pacing: &'static str,
    pub caption_template: &'static str,
    pub cta_lead: &'static str,
    pub seed_tags: [&'static str; 2],
}

static TONE_PROFILES: [ToneProfile; 5] = [
    ToneProfile {
        name: "bold",
        register: "bold, high-energy",
        hook_template: "Stop the scroll: {topic} is about to flip the script for {audience}.",
        opener_direction: "punch the first line straight to camera with zero lead-in",
        pacing: "hard cuts every 1-2 seconds with on-beat zooms",
        caption_template: "Built for {audience} who are done waiting. {goal} starts now, and {offer} is how you get there.",
        cta_lead: "Move first",
        seed_tags: ["bold", "growth"],
    },
    ToneProfile {
        name: "educational",
        register: "educational, authoritative",
        hook_template: "Three things nobody tells {audience} about {topic}.",
        opener_direction: "open on the framework frame and state the promise plainly",
        pacing: "steady cuts every 3-4 seconds, holding on key points",
        caption_template: "A practical breakdown of {topic} for {audience}. Save this one: {goal} gets a lot closer once you apply step two. {offer} has the full playbook.",
        cta_lead: "Learn it once",
        seed_tags: ["howto", "education"],
    },
    ToneProfile {
        name: "playful",
        register: "playful, meme-ready",
        hook_template: "POV: {audience} just found out about {topic}.",
        opener_direction: "lean into the bit with an exaggerated reaction on the first frame",
        pacing: "snappy cuts with meme-style text overlays",
        caption_template: "No because why did nobody tell {audience} about {topic} sooner?? {offer} is waiting if you're ready.",
        cta_lead: "Tag a friend",
        seed_tags: ["funny", "relatable"],
    },
    ToneProfile {
        name: "chill",
        register: "chill, relatable",
        hook_template: "A quiet case for {topic}, made for {audience}.",
        opener_direction: "soft open with voiceover on b-roll, no hard sell",
        pacing: "longer takes with slow push-ins",
        caption_template: "No pressure here. Just {topic}, {audience}, and a small step toward {goal}. {offer} when you're ready.",
        cta_lead: "When you're ready",
        seed_tags: ["everyday", "real"],
    },
    ToneProfile {
        name: "cinematic",
        register: "cinematic, dramatic",
        hook_template: "What if {topic} was the turning point {audience} never saw coming?",
        opener_direction: "wide establishing shot and a beat of silence before the first line",
        pacing: "match cuts timed to the swells of the score",
        caption_template: "Every transformation has a first frame. For {audience} it starts with {topic}. {offer} is the next scene.",
        cta_lead: "Step into it",
        seed_tags: ["cinematic", "storytelling"],
    },
];

static DEFAULT_TONE: ToneProfile = ToneProfile {
    name: "default",
    register: "confident, direct",
    hook_template: "The fastest path from {topic} to results {audience} can feel.",
    opener_direction: "clean single take, eye contact, clear diction",
    pacing: "cuts every 2-3 seconds",
    caption_template: "{topic}, built for {audience}. The target: {goal}. The vehicle: {offer}.",
    cta_lead: "Start today",
    seed_tags: ["creator", "content"],
};

/// Resolves a tone string to its profile.
///
/// The endpoint accepts any string here, so unknown tones get the
/// default profile rather than an error.
pub fn resolve_tone(tone: &str) -> &'static ToneProfile {
    let wanted = tone.trim();
    TONE_PROFILES
        .iter()
        .find(|profile| profile.name.eq_ignore_ascii_case(wanted))
        .unwrap_or_else(|| {
            tracing::debug!("Unknown tone {:?}, using the default profile", tone);
            &DEFAULT_TONE
        })
}
