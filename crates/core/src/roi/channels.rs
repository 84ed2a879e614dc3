use crate::domain::roi::{ChannelPriority, ChannelRecommendation};
use crate::lookup::{find, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelProfile {
    pub display_name: &'static str,
    pub improvement: &'static str,
    pub priority: ChannelPriority,
}

pub const DEFAULT_IMPROVEMENT: &str = "+30%";
pub const DEFAULT_PRIORITY: ChannelPriority = ChannelPriority::Medium;

pub const CHANNEL_PROFILES: &Table<ChannelProfile> = &[
    (
        "google-ads",
        ChannelProfile {
            display_name: "Google Ads",
            improvement: "+45%",
            priority: ChannelPriority::High,
        },
    ),
    (
        "facebook-ads",
        ChannelProfile {
            display_name: "Facebook & Instagram Ads",
            improvement: "+60%",
            priority: ChannelPriority::High,
        },
    ),
    (
        "seo",
        ChannelProfile {
            display_name: "Search Engine Optimization",
            improvement: "+80%",
            priority: ChannelPriority::High,
        },
    ),
    (
        "social-media",
        ChannelProfile {
            display_name: "Social Media Marketing",
            improvement: "+55%",
            priority: ChannelPriority::High,
        },
    ),
    (
        "content-marketing",
        ChannelProfile {
            display_name: "Content Marketing",
            improvement: "+50%",
            priority: ChannelPriority::Medium,
        },
    ),
    (
        "email-marketing",
        ChannelProfile {
            display_name: "Email Marketing",
            improvement: "+35%",
            priority: ChannelPriority::Medium,
        },
    ),
    (
        "influencer-marketing",
        ChannelProfile {
            display_name: "Influencer Marketing",
            improvement: "+40%",
            priority: ChannelPriority::Medium,
        },
    ),
    (
        "affiliate-marketing",
        ChannelProfile {
            display_name: "Affiliate Marketing",
            improvement: "+30%",
            priority: ChannelPriority::Low,
        },
    ),
];

/// One recommendation per input channel, in input order. Unknown identifiers
/// are passed through verbatim with the default improvement and priority.
pub fn recommend_channels(channels: &[String]) -> Vec<ChannelRecommendation> {
    channels
        .iter()
        .map(|channel| match find(CHANNEL_PROFILES, channel) {
            Some(profile) => ChannelRecommendation {
                channel: profile.display_name.to_string(),
                improvement: profile.improvement.to_string(),
                priority: profile.priority,
            },
            None => ChannelRecommendation {
                channel: channel.clone(),
                improvement: DEFAULT_IMPROVEMENT.to_string(),
                priority: DEFAULT_PRIORITY,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::recommend_channels;
    use crate::domain::roi::ChannelPriority;

    #[test]
    fn preserves_input_order_and_length_including_unknown_channels() {
        let channels = vec![
            "seo".to_string(),
            "carrier-pigeon".to_string(),
            "google-ads".to_string(),
            "seo".to_string(),
        ];

        let recommendations = recommend_channels(&channels);

        let names: Vec<_> = recommendations.iter().map(|rec| rec.channel.as_str()).collect();
        assert_eq!(
            names,
            vec!["Search Engine Optimization", "carrier-pigeon", "Google Ads", "Search Engine Optimization"]
        );
        assert_eq!(recommendations[1].improvement, "+30%");
        assert_eq!(recommendations[1].priority, ChannelPriority::Medium);
        assert_eq!(recommendations[2].priority, ChannelPriority::High);
    }
}
