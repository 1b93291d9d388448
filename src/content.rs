use crate::portfolio::{PortfolioCard, ALL_CATEGORIES};

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#testimonials", label: "Testimonials" },
    NavLink { href: "#contact", label: "Contact" },
];

pub struct Stat {
    pub target: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: "4", suffix: "+", label: "Years designing" },
    Stat { target: "60", suffix: "+", label: "Projects shipped" },
    Stat { target: "35", suffix: "", label: "Happy clients" },
];

pub struct Skill {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "UI Design",
        detail: "Design systems, wireframes and high-fidelity mockups in Figma.",
    },
    Skill {
        name: "Front-end",
        detail: "Responsive layouts with HTML, Tailwind CSS and modern JavaScript.",
    },
    Skill {
        name: "Branding",
        detail: "Logos, palettes and type pairings that hold up across media.",
    },
    Skill {
        name: "Print",
        detail: "Posters, flyers and editorial layouts prepared for press.",
    },
];

pub struct FilterTab {
    pub filter: &'static str,
    pub label: &'static str,
}

pub const FILTER_TABS: &[FilterTab] = &[
    FilterTab { filter: ALL_CATEGORIES, label: "All" },
    FilterTab { filter: "web", label: "Web" },
    FilterTab { filter: "ui", label: "UI/UX" },
    FilterTab { filter: "print", label: "Print" },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    /// Hidden until the grid is expanded.
    pub overflow: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Agency Landing Page",
        category: "web",
        summary: "Conversion-focused landing page for a creative agency.",
        image: "/images/agency.webp",
        overflow: false,
    },
    Project {
        title: "Banking App Concept",
        category: "ui",
        summary: "Mobile banking flows with a calm, card-based interface.",
        image: "/images/banking.webp",
        overflow: false,
    },
    Project {
        title: "Coffee House Menu",
        category: "print",
        summary: "Two-sided menu with custom illustrations.",
        image: "/images/coffee.webp",
        overflow: false,
    },
    Project {
        title: "Fitness Tracker Dashboard",
        category: "ui",
        summary: "Weekly progress dashboard with goal tracking.",
        image: "/images/fitness.webp",
        overflow: false,
    },
    Project {
        title: "Restaurant Website",
        category: "web",
        summary: "Reservation-first site with an animated menu.",
        image: "/images/restaurant.webp",
        overflow: true,
    },
    Project {
        title: "Music Festival Poster",
        category: "print",
        summary: "Bold typographic poster series for a summer festival.",
        image: "/images/festival.webp",
        overflow: true,
    },
    Project {
        title: "Travel Booking Flow",
        category: "ui",
        summary: "Search-to-checkout flow tested with real travellers.",
        image: "/images/travel.webp",
        overflow: true,
    },
    Project {
        title: "Developer Portfolio",
        category: "web",
        summary: "Fast static portfolio with a dark mode and smooth reveals.",
        image: "/images/devfolio.webp",
        overflow: true,
    },
];

pub fn portfolio_cards() -> Vec<PortfolioCard> {
    PROJECTS
        .iter()
        .map(|project| PortfolioCard::new(project.category, project.overflow))
        .collect()
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Charles turned a rough brief into a site our customers actually enjoy using.",
        author: "Amara Okafor",
        role: "Founder, Brightside Studio",
    },
    Testimonial {
        quote: "Clear communication, quick iterations and pixel-perfect delivery.",
        author: "Daniel Mensah",
        role: "Product Lead, Finwise",
    },
    Testimonial {
        quote: "The new menu design doubled our weekend orders. Highly recommended.",
        author: "Lina Haddad",
        role: "Owner, Bean & Co.",
    },
];
