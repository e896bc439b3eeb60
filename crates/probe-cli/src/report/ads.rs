use std::io::{self, Write};

use probe_core::CollectionName;
use probe_core::entities::AffiliateAd;

pub(super) fn write<W: Write>(out: &mut W, ads: &[AffiliateAd]) -> io::Result<()> {
    super::heading(out, CollectionName::AffiliateAds, ads.len())?;
    if ads.is_empty() {
        super::placeholder(out, CollectionName::AffiliateAds)?;
        return Ok(());
    }
    for ad in ads {
        writeln!(
            out,
            "  [{}] {} | type: {} | active: {} | 노출: {} | 클릭: {}",
            ad.id, ad.title, ad.ad_type, ad.is_active, ad.impressions, ad.clicks
        )?;
    }
    writeln!(out)
}
