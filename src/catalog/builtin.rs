//! Built-in category definitions

use super::{Category, SearchSuggestions};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn category(
    name: &str,
    placeholder: &str,
    supports_browse: bool,
    supports_boolean: bool,
    term_noun: &str,
    search: (&str, &str, &[&str]),
    explorer_groups: &[&str],
) -> Category {
    let (search_placeholder, header, items) = search;
    Category {
        name: name.to_string(),
        placeholder: placeholder.to_string(),
        supports_browse,
        supports_boolean,
        term_noun: term_noun.to_string(),
        search: SearchSuggestions {
            placeholder: search_placeholder.to_string(),
            header: header.to_string(),
            items: strings(items),
        },
        explorer_groups: strings(explorer_groups),
    }
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        category(
            "Findem Magic",
            "Personal Traits, DEI, etc",
            true,
            false,
            "trait",
            (
                "Search for traits...",
                "Recommended Traits",
                &[
                    "Past Founder",
                    "US Veteran",
                    "Academic Achiever",
                    "First-Generation College Graduate",
                    "Career Changer",
                    "Published Author",
                    "Patent Holder",
                    "Open Source Contributor",
                ],
            ),
            &[
                "Personal Traits",
                "DEI Attributes",
                "Career Achievements",
                "Education Background",
                "Community Involvement",
                "Publications & Patents",
                "Certifications",
                "Awards & Recognition",
                "Language Skills",
            ],
        ),
        category(
            "Job Title",
            "Current, past, or recent job title",
            true,
            true,
            "job title",
            (
                "Search for job titles...",
                "Recommended Job Titles",
                &[
                    "Software Engineer",
                    "Front-End Engineer",
                    "Full-Stack Engineer",
                    "Software Engineer Intern",
                    "Machine Learning Engineer",
                    "DevOps Engineer",
                    "Staff Engineer",
                    "Principal Engineer",
                ],
            ),
            &[
                "Engineering",
                "Finance",
                "Human Resources",
                "Legal",
                "Marketing",
                "Medical",
                "Product",
                "Sales",
                "Support",
            ],
        ),
        category(
            "Location",
            "Location, region, remote, etc",
            false,
            false,
            "location",
            (
                "Search for locations...",
                "Recommended Locations",
                &[
                    "San Francisco, CA",
                    "New York, NY",
                    "Seattle, WA",
                    "Austin, TX",
                    "Remote",
                    "Los Angeles, CA",
                    "Boston, MA",
                    "Denver, CO",
                ],
            ),
            &[],
        ),
        category(
            "Skills",
            "Must-have and nice-to-have skills",
            false,
            true,
            "skill",
            (
                "Search for skills...",
                "Recommended Skills",
                &[
                    "React",
                    "Python",
                    "JavaScript",
                    "TypeScript",
                    "Node.js",
                    "AWS",
                    "Machine Learning",
                    "SQL",
                ],
            ),
            &[],
        ),
        category(
            "Companies",
            "Companies and company lists",
            true,
            true,
            "company",
            (
                "Search for companies...",
                "Recommended Companies",
                &[
                    "Google", "Meta", "Amazon", "Microsoft", "Apple", "Netflix", "Tesla", "Stripe",
                ],
            ),
            &[
                "Technology",
                "Financial Services",
                "Healthcare",
                "Retail & E-commerce",
                "Manufacturing",
                "Consulting",
                "Media & Entertainment",
                "Education",
                "Non-Profit",
            ],
        ),
        category(
            "Company Attributes",
            "Company stage, product category, etc",
            true,
            false,
            "attribute",
            (
                "Search for attributes...",
                "Recommended Attributes",
                &[
                    "Series A",
                    "Series B",
                    "Public Company",
                    "Unicorn",
                    "Y Combinator",
                    "Fast Growing",
                    "Fortune 500",
                    "Tech Startup",
                ],
            ),
            &[
                "Funding Stage",
                "Company Stage",
                "Product Category",
                "Business Model",
                "Growth Rate",
                "Investors",
                "Accelerators",
                "Company Culture",
                "Tech Stack",
            ],
        ),
        category(
            "Company Size",
            "Current, past, or recent size",
            true,
            false,
            "size",
            (
                "Search for company size...",
                "Recommended Sizes",
                &[
                    "1-10 employees",
                    "11-50 employees",
                    "51-200 employees",
                    "201-500 employees",
                    "501-1000 employees",
                    "1001-5000 employees",
                    "5001-10000 employees",
                    "10000+ employees",
                ],
            ),
            &[
                "Startup (1-50)",
                "Small (51-200)",
                "Medium (201-1000)",
                "Large (1001-5000)",
                "Enterprise (5000+)",
                "Mega Corp (10000+)",
            ],
        ),
        category(
            "Industries",
            "Current, past, or recent industry",
            true,
            false,
            "industry",
            (
                "Search for industries...",
                "Recommended Industries",
                &[
                    "Software & Technology",
                    "Financial Services",
                    "Healthcare",
                    "E-commerce",
                    "Enterprise Software",
                    "Consumer Technology",
                    "Artificial Intelligence",
                    "Cybersecurity",
                ],
            ),
            &[
                "Software & Technology",
                "Financial Services",
                "Healthcare & Life Sciences",
                "Manufacturing & Industrial",
                "Retail & Consumer",
                "Media & Entertainment",
                "Professional Services",
                "Education & Research",
                "Energy & Utilities",
            ],
        ),
    ]
}
