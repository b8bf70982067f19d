//! Documentation pages shown in the app shell
//!
//! Authored content only; the page view renders these blocks as-is.

#[derive(Debug)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Code {
        language: &'static str,
        source: &'static str,
    },
}

#[derive(Debug)]
pub struct PageSection {
    /// Table-of-contents anchor, unique within the page
    pub anchor: &'static str,
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug)]
pub struct Page {
    pub route: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [PageSection],
}

pub fn page(route: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.route == route)
}

pub static PAGES: &[Page] = &[
    Page {
        route: "/introduction",
        title: "Introduction",
        summary: "Scheduling, time tracking and team communication in one workspace.",
        sections: &[
            PageSection {
                anchor: "what-it-is",
                heading: "What it is",
                blocks: &[
                    Block::Paragraph(
                        "A workforce-management platform for shift-based businesses. Managers plan rotas, \
                         employees clock in from their phones and payroll receives approved hours without re-keying.",
                    ),
                    Block::Bullets(&[
                        "One schedule shared by managers and staff",
                        "Mobile apps for iOS and Android",
                        "Works across single sites and multi-location groups",
                    ]),
                ],
            },
            PageSection {
                anchor: "who-it-is-for",
                heading: "Who it is for",
                blocks: &[
                    Block::Paragraph("Teams where work happens in shifts rather than office hours."),
                    Block::Bullets(&["Retail and grocery", "Hospitality and food service", "Healthcare and care homes", "Logistics and warehousing"]),
                ],
            },
        ],
    },
    Page {
        route: "/challenges",
        title: "Challenges",
        summary: "Problems we hear from operations teams before they switch.",
        sections: &[
            PageSection {
                anchor: "spreadsheets",
                heading: "Spreadsheet rotas",
                blocks: &[
                    Block::Paragraph(
                        "Schedules built in spreadsheets drift out of date the moment they are printed. \
                         Changes travel by phone and group chat, and nobody is sure which version is current.",
                    ),
                ],
            },
            PageSection {
                anchor: "payroll-errors",
                heading: "Payroll errors",
                blocks: &[
                    Block::Bullets(&[
                        "Hours copied by hand from paper timesheets",
                        "Overtime noticed only after it is paid",
                        "Premiums and night rates applied inconsistently",
                    ]),
                ],
            },
            PageSection {
                anchor: "compliance-risk",
                heading: "Compliance risk",
                blocks: &[
                    Block::Paragraph(
                        "Working-time rules differ by country and contract. Without automated checks, \
                         breaches surface in audits instead of at planning time.",
                    ),
                ],
            },
        ],
    },
    Page {
        route: "/features",
        title: "Features",
        summary: "An overview of the modules a proposal can include.",
        sections: &[
            PageSection {
                anchor: "scheduling",
                heading: "Scheduling",
                blocks: &[Block::Bullets(&[
                    "Drag-and-drop shift planner with templates",
                    "Open shifts and employee shift swaps",
                    "Demand-based auto-scheduling",
                ])],
            },
            PageSection {
                anchor: "time",
                heading: "Time & attendance",
                blocks: &[Block::Bullets(&[
                    "Geofenced mobile clock-in and kiosk terminals",
                    "Automatic timesheets with break tracking",
                    "Overtime alerts before the shift starts",
                ])],
            },
            PageSection {
                anchor: "people",
                heading: "Leave and communication",
                blocks: &[Block::Bullets(&[
                    "Leave requests, accruals and holiday calendars",
                    "Announcements, reminders and team chat",
                ])],
            },
        ],
    },
    Page {
        route: "/pricing",
        title: "Pricing",
        summary: "Per active employee per month, billed annually or monthly.",
        sections: &[
            PageSection {
                anchor: "plans",
                heading: "Plans",
                blocks: &[Block::Bullets(&[
                    "Starter: scheduling and time tracking for a single site",
                    "Professional: adds leave, payroll export and analytics",
                    "Enterprise: adds SSO, data residency and custom integrations",
                ])],
            },
            PageSection {
                anchor: "billing",
                heading: "Billing",
                blocks: &[Block::Paragraph(
                    "Only employees with at least one shift in the billing period are counted. \
                     Annual plans are invoiced up front; monthly plans can be cancelled at any time.",
                )],
            },
        ],
    },
    Page {
        route: "/security",
        title: "Security",
        summary: "How customer and employee data is protected.",
        sections: &[
            PageSection {
                anchor: "hosting",
                heading: "Hosting",
                blocks: &[Block::Paragraph(
                    "Data is hosted in the EU or the US at the customer's choice, encrypted in transit and at rest.",
                )],
            },
            PageSection {
                anchor: "access",
                heading: "Access control",
                blocks: &[Block::Bullets(&[
                    "Role-based permissions per location",
                    "Single sign-on via SAML or OpenID Connect",
                    "Full audit trail of schedule and timesheet changes",
                ])],
            },
        ],
    },
    Page {
        route: "/api",
        title: "API & Integrations",
        summary: "Connect HR, payroll and point-of-sale systems.",
        sections: &[
            PageSection {
                anchor: "rest-api",
                heading: "REST API",
                blocks: &[
                    Block::Paragraph("Every resource in the app is available over a JSON API authenticated with bearer tokens."),
                    Block::Code {
                        language: "bash",
                        source: "curl https://api.example.com/v1/shifts?from=2026-01-05 \\\n  -H \"Authorization: Bearer $TOKEN\"",
                    },
                ],
            },
            PageSection {
                anchor: "webhooks",
                heading: "Webhooks",
                blocks: &[
                    Block::Paragraph("Subscribe to events instead of polling."),
                    Block::Code {
                        language: "json",
                        source: "{\n  \"event\": \"shift.published\",\n  \"shift_id\": \"sh_82f1\",\n  \"location_id\": \"loc_17\"\n}",
                    },
                ],
            },
            PageSection {
                anchor: "connectors",
                heading: "Connectors",
                blocks: &[Block::Bullets(&["HRIS: employee records sync", "Payroll: approved hours export", "POS: sales data for forecasting"])],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let mut routes = HashSet::new();
        for page in PAGES {
            assert!(routes.insert(page.route), "duplicate route {}", page.route);
        }
    }

    #[test]
    fn test_anchors_unique_within_page() {
        for page in PAGES {
            let mut anchors = HashSet::new();
            for section in page.sections {
                assert!(anchors.insert(section.anchor), "{}#{}", page.route, section.anchor);
            }
        }
    }

    #[test]
    fn test_page_lookup() {
        assert_eq!(page("/pricing").map(|p| p.title), Some("Pricing"));
        assert!(page("/missing").is_none());
    }
}
