//! JSON response bodies. Resource bodies carry `links` so clients can
//! navigate without building URLs themselves.

use jiff::civil::Date;
use serde::Serialize;
use waypoint_core::{
    Itinerary, ItinerarySummary, StoredEvent, StoredItinerary, display::ClockTime,
};

#[derive(Debug, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
    pub method: &'static str,
}

impl Link {
    fn get(rel: &'static str, href: String) -> Self {
        Self {
            rel,
            href,
            method: "GET",
        }
    }

    fn delete(rel: &'static str, href: String) -> Self {
        Self {
            rel,
            href,
            method: "DELETE",
        }
    }
}

fn itinerary_href(id: u64) -> String {
    format!("/itineraries/{id}")
}

fn itinerary_links(id: u64) -> Vec<Link> {
    vec![
        Link::get("self", itinerary_href(id)),
        Link::delete("delete", itinerary_href(id)),
        Link::get("collection", "/itineraries".to_string()),
    ]
}

/// One day of an unsaved itinerary.
#[derive(Debug, Serialize)]
pub struct PreviewDay {
    pub date: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub activities: Vec<PreviewActivity>,
}

#[derive(Debug, Serialize)]
pub struct PreviewActivity {
    pub start_time: String,
    pub end_time: String,
    pub activity: String,
}

impl PreviewDay {
    pub fn from_itinerary(itinerary: &Itinerary) -> Vec<Self> {
        itinerary
            .day_plans
            .iter()
            .map(|plan| Self {
                date: plan.date,
                destination: itinerary.destination.clone(),
                activities: plan
                    .slots
                    .iter()
                    .map(|slot| PreviewActivity {
                        start_time: ClockTime(slot.start_time).to_string(),
                        end_time: ClockTime(slot.end_time).to_string(),
                        activity: slot.activity.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ItineraryBody {
    #[serde(flatten)]
    pub itinerary: StoredItinerary,
    pub links: Vec<Link>,
}

impl From<StoredItinerary> for ItineraryBody {
    fn from(itinerary: StoredItinerary) -> Self {
        let links = itinerary_links(itinerary.id);
        Self { itinerary, links }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryBody {
    #[serde(flatten)]
    pub summary: ItinerarySummary,
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryListBody {
    pub items: Vec<SummaryBody>,
    pub links: Vec<Link>,
}

impl FromIterator<ItinerarySummary> for ItineraryListBody {
    fn from_iter<I: IntoIterator<Item = ItinerarySummary>>(iter: I) -> Self {
        let items = iter
            .into_iter()
            .map(|summary| SummaryBody {
                links: vec![Link::get("self", itinerary_href(summary.id))],
                summary,
            })
            .collect();

        Self {
            items,
            links: vec![Link::get("self", "/itineraries".to_string())],
        }
    }
}

/// Confirmation of a deletion, with the removed record.
#[derive(Debug, Serialize)]
pub struct DeletedBody<T> {
    pub detail: String,
    pub deleted: T,
    pub links: Vec<Link>,
}

impl<T> DeletedBody<T> {
    pub fn new(detail: impl Into<String>, deleted: T) -> Self {
        Self {
            detail: detail.into().trim_end().to_string(),
            deleted,
            links: vec![Link::get("collection", "/itineraries".to_string())],
        }
    }
}

pub type DeletedItinerary = DeletedBody<ItinerarySummaryRef>;
pub type DeletedEvent = DeletedBody<StoredEvent>;

/// Identifying fields of a deleted itinerary.
#[derive(Debug, Serialize)]
pub struct ItinerarySummaryRef {
    pub id: u64,
    pub destination: Option<String>,
    pub event_count: usize,
}

impl From<&StoredItinerary> for ItinerarySummaryRef {
    fn from(itinerary: &StoredItinerary) -> Self {
        Self {
            id: itinerary.id,
            destination: itinerary.destination.clone(),
            event_count: itinerary.event_count(),
        }
    }
}
