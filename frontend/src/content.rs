// Static copy for the landing page sections.

#[derive(Clone, Copy, PartialEq)]
pub enum Icon {
    ShieldCheck,
    Car,
    SunDim,
    Sparkles,
    CheckCircle,
}

impl Icon {
    /// Font Awesome class for the icon.
    pub fn class(self) -> &'static str {
        match self {
            Icon::ShieldCheck => "fa-solid fa-shield-halved",
            Icon::Car => "fa-solid fa-car",
            Icon::SunDim => "fa-solid fa-sun",
            Icon::Sparkles => "fa-solid fa-wand-magic-sparkles",
            Icon::CheckCircle => "fa-solid fa-circle-check",
        }
    }
}

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#gallery", label: "Gallery" },
    NavLink { href: "#testimonials", label: "Testimonials" },
    NavLink { href: "#pricing", label: "Packages" },
    NavLink { href: "#faq", label: "FAQ" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#pricing", label: "Packages" },
    NavLink { href: "#faq", label: "FAQ" },
    NavLink { href: "#contact", label: "Contact" },
];

pub struct Badge {
    pub icon: Icon,
    pub label: &'static str,
}

pub const TRUST_BADGES: &[Badge] = &[
    Badge { icon: Icon::ShieldCheck, label: "Lifetime Warranty" },
    Badge { icon: Icon::Sparkles, label: "Computer‑Cut" },
    Badge { icon: Icon::Car, label: "Same‑Day Service" },
];

pub const CONTACT_BADGES: &[&str] = &["Insured", "Certified Installers", "Clean Room Bay"];

pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: Icon,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Ceramic Tint",
        desc: "Maximum heat rejection & UV protection.",
        icon: Icon::ShieldCheck,
    },
    Service {
        title: "Carbon Tint",
        desc: "Deep, non‑reflective look without signal interference.",
        icon: Icon::Car,
    },
    Service {
        title: "Windshield & Sunstrips",
        desc: "Legal‑limit films & precision visor strips.",
        icon: Icon::SunDim,
    },
];

pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Carbon",
        price: "From $199",
        features: &["Deep black finish", "99% UV block", "Rear 5 windows"],
        featured: false,
    },
    Package {
        name: "Ceramic",
        price: "From $329",
        features: &["Up to 88% heat rejection", "Lifetime warranty", "All side & rear"],
        featured: true,
    },
    Package {
        name: "Elite Ceramic+",
        price: "From $449",
        features: &[
            "IR nano‑ceramic",
            "Best clarity & comfort",
            "Full vehicle incl. windshield strip",
        ],
        featured: false,
    },
];

pub const PRICING_NOTE: &str =
    "Prices vary by vehicle. Windshield and front‑window legal limits depend on state law.";

pub struct Testimonial {
    pub name: &'static str,
    pub car: &'static str,
    pub quote: &'static str,
    pub stars: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex P.",
        car: "2022 Tesla Model 3",
        quote: "Flawless install. Heat rejection is night and day, and there’s zero dust or bubbles.",
        stars: 5,
    },
    Testimonial {
        name: "Briana S.",
        car: "2019 BMW M4",
        quote: "Booked online, in and out on time. The ceramic tint keeps my leather cool even at noon.",
        stars: 5,
    },
    Testimonial {
        name: "Marcus V.",
        car: "2021 Ford F-150",
        quote: "Professional, clean shop, lifetime warranty actually printed on my receipt.",
        stars: 5,
    },
];

pub const PROCESS_STEPS: &[&str] = &[
    "Vehicle is inspected and glass cleaned with filtered water and lint‑free prep.",
    "Patterns are laser‑cut to your exact year/make/model. No blades near your glass.",
    "Films installed in a climate‑controlled bay to keep dust out and clarity in.",
    "Final inspection, care instructions, and warranty registration.",
];

pub const BENEFITS: &[Badge] = &[
    Badge { icon: Icon::ShieldCheck, label: "UV & skin protection" },
    Badge { icon: Icon::SunDim, label: "Cooler cabin temps" },
    Badge { icon: Icon::Sparkles, label: "Glare reduction" },
    Badge { icon: Icon::Car, label: "Enhanced privacy" },
    Badge { icon: Icon::ShieldCheck, label: "Shatter resistance" },
    Badge { icon: Icon::CheckCircle, label: "Factory‑like finish" },
];

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "tint-duration",
        question: "How long does tint take?",
        answer: "Most full cars are completed within 2–3 hours depending on size and film.",
    },
    FaqEntry {
        id: "tint-legality",
        question: "Is it legal?",
        answer: "We’ll guide you on state legal limits and offer options that stay compliant.",
    },
    FaqEntry {
        id: "tint-care",
        question: "How do I care for new tint?",
        answer: "Don’t roll windows for 2–3 days. Clean with ammonia‑free glass cleaner and soft towels.",
    },
    FaqEntry {
        id: "tint-warranty",
        question: "What is the warranty?",
        answer: "Lifetime coverage against bubbling, peeling, fading, or color change for original owner.",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub icon_class: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", icon_class: "fa-brands fa-instagram", href: "#" },
    SocialLink { label: "Facebook", icon_class: "fa-brands fa-facebook", href: "#" },
    SocialLink { label: "YouTube", icon_class: "fa-brands fa-youtube", href: "#" },
];

/// Number of filled stars out of five, clamped.
pub fn star_fill(stars: u8) -> [bool; 5] {
    let mut row = [false; 5];
    for (i, slot) in row.iter_mut().enumerate() {
        *slot = i < usize::from(stars.min(5));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn star_row_fills_from_the_left() {
        assert_eq!(star_fill(3), [true, true, true, false, false]);
        assert_eq!(star_fill(0), [false; 5]);
        assert_eq!(star_fill(9), [true; 5]);
    }

    #[test]
    fn faq_anchors_are_unique() {
        let ids: HashSet<_> = FAQ.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), FAQ.len());
    }

    #[test]
    fn exactly_one_featured_package() {
        assert_eq!(PACKAGES.iter().filter(|p| p.featured).count(), 1);
    }
}
