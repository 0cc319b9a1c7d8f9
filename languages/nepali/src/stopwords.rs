use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Nepali stopword table: function words, pronouns, auxiliaries and common
/// verb forms that carry no topical content. Matching is exact against the
/// case-folded token.
const STOPWORDS: &[&str] = &[
    "अब", "अगाडि", "अझै", "अक्सर", "अलग", "आठ", "आजको", "आदि", "आत्म", "आफू",
    "आफूलाई", "आफैलाई", "आफ्नो", "आफ्नै", "आयो", "उदाहरण", "उन", "उनको", "उनले",
    "उप", "उहाँलाई", "एउटै", "एक", "एकदम", "औं", "कतै", "कम से कम", "कसरी", "कसै",
    "कसैले", "कहाँ", "कहाँबाट", "कहिलेकाहीं", "कहिल्यै", "कहीं", "का", "कि", "किन",
    "किनभने", "कुनै", "कुरा", "कृपया", "के", "केवल", "केहि", "केही", "को", "कोही", "क्रमशः",
    "गए", "गरि", "गरी", "गरेका", "गरेको", "गरेर", "गरौं", "गर्छ", "गर्छु", "गर्दै",
    "गर्न", "गर्नु", "गर्नुपर्छ", "गर्ने", "गर्यौं", "गैर", "चाँडै", "चार", "चाले",
    "चाहनुहुन्छ", "चाहन्छु", "चाहिए", "छ", "छन्", "छु", "छैन", "छौँ", "छौं", "जताततै",
    "जब", "जबकि", "जसको", "जसबाट", "जसमा", "जसलाई", "जसले", "जस्तै", "जस्तो",
    "जस्तोसुकै", "जहाँ", "जान", "जाहिर", "जुन", "जे", "जो", "ठीक", "त", "तत्काल",
    "तथा", "तदनुसार", "तपाइँको", "तपाईं", "तर", "तल", "तापनि", "तिनी", "तिनीहरू",
    "तिनीहरूको", "तिनीहरूलाई", "तिनीहरूले", "तिमी", "तिर", "ती", "तीन", "तुरुन्तै",
    "तेस्रो", "त्यसकारण", "त्यसपछि", "त्यसमा", "त्यसैले", "त्यहाँ", "त्यो", "थिए",
    "थिएन", "थिएनन्", "थियो", "दिए", "दिनुभएको", "दिनुहुन्छ", "दुई", "देख", "देखि",
    "देखिन्छ", "देखियो", "देखे", "देखेको", "देखेर", "देख्न", "दोश्रो", "दोस्रो",
    "धेरै", "न", "नजिकै", "नत्र", "नयाँ", "नि", "निम्ति", "निम्न", "निम्नानुसार",
    "निर्दिष्ट", "नै", "नौ", "पक्का", "पक्कै", "पछि", "पछिल्लो", "पटक", "पनि", "पर्छ",
    "पर्थ्यो", "पर्याप्त", "पहिले", "पहिलो", "पहिल्यै", "पाँच", "पाँचौं", "पूर्व",
    "प्रति", "प्रत्येक", "प्लस", "फेरि", "बने", "बन्द", "बन्न", "बरु", "बाटो", "बारे",
    "बाहिर", "बाहेक", "बीच", "बीचमा", "भए", "भएको", "भन", "भने", "भनेर", "भन्छन्",
    "भन्छु", "भन्दा", "भन्नुभयो", "भन्ने", "भर", "भित्र", "भित्री", "म", "मलाई", "मा",
    "मात्र", "माथि", "मुख्य", "मेरो", "यति", "यथोचित", "यदि", "यद्यपि", "यस", "यसको",
    "यसपछि", "यसबाहेक", "यसरी", "यसो", "यस्तो", "यहाँ", "यहाँसम्म", "या", "यी", "यो",
    "र", "रही", "रहेका", "रहेको", "राखे", "राख्छ", "राम्रो", "रूप", "लगभग", "लाई",
    "लागि", "ले", "वरिपरि", "वास्तवमा", "वाहेक", "विरुद्ध", "विशेष", "शायद", "सँग",
    "सँगै", "सक्छ", "सट्टा", "सधैं", "सबै", "सबैलाई", "समय", "सम्भव", "सम्म", "सही",
    "साँच्चै", "सात", "साथ", "साथै", "सायद", "सारा", "सो", "सोध्न", "सोही", "स्पष्ट",
    "हरे", "हरेक", "हामी", "हामीलाई", "हाम्रो", "हुँ", "हुन", "हुने", "हुनेछ", "हुन्",
    "हुन्छ", "हो", "होइन", "होइनन्", "होला", "होस्", "पो", "कि’",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Exact membership test against the stopword table.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
