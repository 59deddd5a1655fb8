//! Copy shown on the landing page.

pub const SERVICES: [&str; 7] = [
    "Website Design",
    "Sales Funnel",
    "Newsletter",
    "Sales Copy",
    "Ads Management",
    "Figma Design",
    "Memecoin Website",
];

pub struct CaseStudy {
    pub title: &'static str,
    pub result: &'static str,
    pub gradient: &'static str,
}

pub const PORTFOLIO: [CaseStudy; 3] = [
    CaseStudy {
        title: "GlowSkin",
        result: "+340% ROAS",
        gradient: "from-purple-500 to-pink-500",
    },
    CaseStudy {
        title: "CoachFlow",
        result: "12K subs in 30 days",
        gradient: "from-green-500 to-teal-500",
    },
    CaseStudy {
        title: "ShopPulse",
        result: "1 in 4 converted",
        gradient: "from-orange-500 to-red-500",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "Vyvabrill 3x’d our revenue in 60 days. The funnel is pure magic.",
        name: "Sarah K.",
        role: "Founder, GlowSkin",
    },
    Testimonial {
        quote: "Best decision we made. Newsletter open rate went from 12% to 58%.",
        name: "Mike R.",
        role: "CEO, CoachFlow",
    },
    Testimonial {
        quote: "Our memecoin site went viral in 48 hours. Insane growth!",
        name: "Alex T.",
        role: "Crypto Founder",
    },
    Testimonial {
        quote: "The sales copy converted 42% of cold traffic. Unreal.",
        name: "Lisa M.",
        role: "E-com Owner",
    },
];

pub const TAGLINE: &str =
    "We build high-converting landing pages, sales funnels & newsletters that grow your revenue.";

pub const ABOUT: &str = "From viral landing pages to automated funnels and newsletters that convert \
     we use data, design, and psychology to turn visitors into customers.";

pub const VISION: &str = "To become a leading creative growth partner that helps brands connect deeply, \
     grow sustainably, and build experiences that inspire lasting trust and recognition.";

pub const MISSION: &str = "To craft meaningful brand identities, build strong digital experiences, \
     and drive intentional growth through creativity, strategy, and storytelling, empowering \
     businesses to shine brilliantly in a digital-first world.";
