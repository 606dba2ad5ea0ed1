/// Name of the directory created in the current working directory when no base path is given.
pub const DEFAULT_PROJECT_NAME: &str = "next-finance-website";

/// One entry of a declarative project layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A directory and the entries nested under it, in creation order.
    Directory(&'static str, &'static [Node]),
    /// A zero-byte placeholder file.
    File(&'static str),
}
impl Node {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directory(name, _) => name,
            Self::File(name) => name,
        }
    }
}

/// Next.js App Router skeleton (src directory, TypeScript, Tailwind, ShadCN UI).
pub static NEXT_APP_LAYOUT: &[Node] = &[
    Node::Directory(
        "src",
        &[
            Node::Directory(
                "app",
                &[
                    Node::File("layout.tsx"),
                    Node::File("page.tsx"),
                    Node::File("globals.css"),
                ],
            ),
            Node::Directory(
                "components",
                &[
                    // ShadCN primitives
                    Node::Directory(
                        "ui",
                        &[
                            Node::File("button.tsx"),
                            Node::File("card.tsx"),
                            Node::File("dialog.tsx"),
                            Node::File("form.tsx"),
                            Node::File("input.tsx"),
                            Node::File("select.tsx"),
                            Node::File("textarea.tsx"),
                        ],
                    ),
                    Node::Directory(
                        "layout",
                        &[Node::File("navbar.tsx"), Node::File("footer.tsx")],
                    ),
                    Node::Directory(
                        "sections",
                        &[
                            Node::File("hero-section.tsx"),
                            Node::File("services.tsx"),
                            Node::File("workflow.tsx"),
                            Node::File("pricing.tsx"),
                            Node::File("testimonials.tsx"),
                            Node::File("booking-form.tsx"),
                            Node::File("disclaimer-dialog.tsx"),
                        ],
                    ),
                ],
            ),
            Node::Directory("hooks", &[Node::File("use-scroll-animation.ts")]),
            Node::Directory("lib", &[Node::File("utils.ts"), Node::File("email.ts")]),
            Node::Directory("constants", &[Node::File("index.ts")]),
            Node::Directory("types", &[Node::File("index.ts")]),
        ],
    ),
    Node::Directory(
        "public",
        &[
            Node::File("favicon.ico"),
            Node::Directory(
                "images",
                &[
                    Node::File("logo.webp"),
                    Node::File("code.webp"),
                    Node::File("placeholder.jpg"),
                ],
            ),
            Node::File("website_overview.svg"),
            Node::File("robots.txt"),
            Node::File("sitemap.xml"),
        ],
    ),
];
