//! Static site content: services, testimonials, and navigation anchors.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Makeup",
        description: "Whether it is a night out, a photoshoot, or a Tuesday when you just want to feel beautiful.",
        image: "/images/makeup.jpg",
    },
    Service {
        title: "Luxury Bridal",
        description: "A premium, all inclusive bridal package. Multiple trials, day of application, on site touch ups, and full bridal party coordination.",
        image: "/images/luxury-bridal.jpg",
    },
    Service {
        title: "Personal Lessons",
        description: "One on one time where I teach you how to bring out your best features.",
        image: "/images/pro-lessons.jpg",
    },
    Service {
        title: "Pro Lessons",
        description: "Go beyond technique. Learn how to connect with your clients and help them feel truly seen.",
        image: "/images/pro-lessons-new.jpg",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I have never felt so comfortable in a makeup chair. Miriam sees something in you that you forgot was there.",
        author: "Sarah M.",
    },
    Testimonial {
        quote: "It was not just about how I looked. I left feeling lighter, like I had permission to just be myself.",
        author: "Jessica L.",
    },
    Testimonial {
        quote: "She taught me that makeup is not about covering up. It is about celebrating what is already there.",
        author: "Amanda R.",
    },
];

/// (label, anchor) pairs for the nav; the host document provides the
/// matching section ids.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Services", "#services"),
    ("Portfolio", "#portfolio"),
    ("About", "#about"),
    ("Contact", "#contact"),
];
