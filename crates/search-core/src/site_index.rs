// search-core/src/site_index.rs
//! The hand-curated index of the site's pages

use crate::models::IndexEntry;

/// Every searchable page of the site, in display order
pub fn site_entries() -> Vec<IndexEntry> {
    vec![
        // Dhikr & Dua Pages
        IndexEntry::new(
            "Morning Adhkar",
            "morning-adhkar.html",
            "Morning supplications (adhkar) to start your day with remembrance of Allah. Recite these duas after Fajr prayer.",
            "morning adhkar dhikr dua daily fajr sunrise supplications protection barakah blessings",
        ),
        IndexEntry::new(
            "Evening Adhkar",
            "evening-adhkar.html",
            "Evening adhkar to end your day with protection and barakah. Recite after Maghrib or before sleep.",
            "evening adhkar dhikr night protection maghrib sunset daily supplications",
        ),
        IndexEntry::new(
            "Dhikr & Du'a Collection",
            "dhikr-dua.html",
            "Central hub for daily dhikr, duas, and prophetic supplications. Complete guide to remembrance.",
            "dhikr dua duas supplication adhkar collection remembrance daily prophetic sunnah",
        ),
        IndexEntry::new(
            "Before Sleep Adhkar",
            "before-sleep-adhkar.html",
            "Adhkar and duas to recite before going to sleep. Protection from nightmares and evil.",
            "sleep before sleep adhkar night protection bedtime rest duas",
        ),
        IndexEntry::new(
            "Waking Up Adhkar",
            "waking-up.html",
            "Duas and adhkar when waking up from sleep. Start your day with gratitude to Allah.",
            "waking up morning sleep awakening duas gratitude",
        ),
        IndexEntry::new(
            "After Salah Adhkar",
            "after-salah.html",
            "Remembrances and duas to say after the obligatory prayers. Post-prayer supplications.",
            "after salah prayer adhkar dhikr obligatory fard tasbih takbir",
        ),
        IndexEntry::new(
            "Adhan and Masjid Duas",
            "adhan-masjid.html",
            "Duas to recite when hearing the adhan and entering the masjid.",
            "adhan azan masjid mosque prayer call entering duas",
        ),
        IndexEntry::new(
            "Lavatory and Wudu Duas",
            "lavatory-wudu.html",
            "Duas for entering bathroom, relieving oneself, and making wudu (ablution).",
            "lavatory toilet bathroom wudu ablution cleanliness duas purification",
        ),
        IndexEntry::new(
            "Food and Drink Duas",
            "food-drink.html",
            "Duas before and after eating, drinking, and breaking fast.",
            "food drink eating meal iftar breakfast lunch dinner water duas basmala",
        ),
        IndexEntry::new(
            "Clothes Duas",
            "clothes.html",
            "Duas when wearing new clothes or getting dressed.",
            "clothes clothing dress wear garment new duas",
        ),
        IndexEntry::new(
            "Travel Duas",
            "travel.html",
            "Duas for traveling, boarding vehicles, and journey safety.",
            "travel journey trip car bus plane train vehicle safety duas safar",
        ),
        IndexEntry::new(
            "Social Interactions Duas",
            "social-interactions.html",
            "Duas for meeting people, visiting sick, condolences, and social occasions.",
            "social meeting people greetings sick visit condolences duas etiquette",
        ),
        IndexEntry::new(
            "Marriage and Children Duas",
            "marriage-children.html",
            "Duas related to marriage, intimacy, pregnancy, and raising children.",
            "marriage wedding nikah children kids pregnancy family duas",
        ),
        IndexEntry::new(
            "Money and Shopping Duas",
            "money-shopping.html",
            "Duas for financial matters, business, shopping, and marketplace.",
            "money shopping market business trade finance rizq provision duas",
        ),
        IndexEntry::new(
            "Gatherings Duas",
            "gatherings.html",
            "Duas for gatherings, meetings, and when leaving an assembly.",
            "gatherings meeting assembly majlis kaffaratul majlis duas social",
        ),
        IndexEntry::new(
            "Hajj and Umrah Duas",
            "hajj-umrah.html",
            "Duas and adhkar for Hajj and Umrah pilgrimage.",
            "hajj umrah pilgrimage makkah mecca tawaf safa marwa duas",
        ),
        IndexEntry::new(
            "Death and Janazah Duas",
            "death.html",
            "Duas for the dying, deceased, and funeral prayers.",
            "death dying deceased janazah funeral burial grave cemetery duas",
        ),
        IndexEntry::new(
            "Difficulties and Happiness Duas",
            "difficulties-happiness.html",
            "Duas for hardship, anxiety, gratitude, and moments of joy.",
            "difficulties hardship anxiety worry happiness joy gratitude shukr duas relief",
        ),
        IndexEntry::new(
            "Nature and Weather Duas",
            "nature.html",
            "Duas when seeing rain, thunder, lightning, and natural phenomena.",
            "nature weather rain thunder lightning wind storm duas natural",
        ),
        IndexEntry::new(
            "Nightmares and Bad Dreams",
            "nightmares.html",
            "What to do and say when experiencing nightmares or bad dreams.",
            "nightmares bad dreams sleep protection duas shaytan",
        ),
        IndexEntry::new(
            "Salah Duas",
            "salah.html",
            "Duas and adhkar related to the five daily prayers.",
            "salah prayer namaz fard obligatory sunnah duas qiyam ruku sujud",
        ),
        IndexEntry::new(
            "Istikharah Dua",
            "istikharah.html",
            "The prayer of seeking guidance from Allah when making decisions.",
            "istikharah guidance decision choice seeking allah help duas",
        ),
        IndexEntry::new(
            "Istighfar - Seeking Forgiveness",
            "istighfar.html",
            "Duas for seeking forgiveness and repentance from Allah.",
            "istighfar forgiveness repentance tawbah sins mercy duas astaghfirullah",
        ),
        IndexEntry::new(
            "Salawat on the Prophet",
            "salawat.html",
            "Sending blessings and peace upon Prophet Muhammad (peace be upon him).",
            "salawat durood blessings prophet muhammad peace sallallahu alayhi wasallam duas",
        ),
        IndexEntry::new(
            "Sunnah Duas Collection",
            "sunnah-duas.html",
            "Comprehensive collection of authentic prophetic duas from hadith.",
            "sunnah duas prophetic hadith authentic collection prophet duas",
        ),
        IndexEntry::new(
            "Quranic Duas",
            "quranic-duas.html",
            "Duas and supplications mentioned in the Quran.",
            "quran quranic duas ayat verses supplications allah book",
        ),
        IndexEntry::new(
            "Praises of Allah",
            "praises.html",
            "Words and phrases praising and glorifying Allah.",
            "praise glorification tasbih tahmid tahlil takbir subhanallah alhamdulillah",
        ),
        // Educational Pages
        IndexEntry::new(
            "What is Dua?",
            "what-is-dua.html",
            "Understanding the concept, importance, and essence of dua in Islam.",
            "what is dua supplication prayer concept importance worship",
        ),
        IndexEntry::new(
            "Virtues of Dhikr",
            "virtues-of-dhikr.html",
            "Benefits and virtues of remembering Allah frequently. Rewards of dhikr.",
            "virtues of dhikr remembrance benefits reward blessings hadith quran",
        ),
        IndexEntry::new(
            "Types of Dhikr",
            "types-of-dhikr.html",
            "Different forms of dhikr from Qur'an and Sunnah. Categories of remembrance.",
            "types of dhikr tasbih tahmid tahlil takbir categories forms",
        ),
        IndexEntry::new(
            "Why Sunnah Adhkar Matter",
            "why-sunnah-adhkar.html",
            "Understanding the importance of prophetic daily adhkar in our lives.",
            "sunnah adhkar daily prophetic importance significance prophet",
        ),
        IndexEntry::new(
            "How to Do Dhikr",
            "how-to-do-dhikr.html",
            "Practical guidance on building a consistent dhikr routine and habit.",
            "how to dhikr guide practical routine habit consistency tips",
        ),
        IndexEntry::new(
            "Etiquette of Making Dua",
            "etiquette-of-making-dua.html",
            "Proper manners and etiquette when making dua to Allah.",
            "etiquette dua manners adab how to make proper conditions",
        ),
        IndexEntry::new(
            "Five Steps in Dua",
            "five-steps-in-dua.html",
            "A structured approach to making effective and accepted duas.",
            "five steps dua guide method approach structure how to",
        ),
        IndexEntry::new(
            "Occasions When Dua is Accepted",
            "occasions-accepted.html",
            "Times and situations when duas are most likely to be answered.",
            "occasions times accepted dua mustajab answer response best",
        ),
        IndexEntry::new(
            "Optimal Guide for Making Dua",
            "optimal-guide-for-making-dua.html",
            "Comprehensive guide to making the most effective duas.",
            "optimal guide dua making best effective accepted complete",
        ),
        IndexEntry::new(
            "Key to Contentment",
            "key-to-contentment.html",
            "Finding tranquility and peace of heart through remembrance of Allah.",
            "contentment tranquility heart dhikr peace satisfaction happiness",
        ),
        IndexEntry::new(
            "Protection of Iman",
            "protection-of-iman.html",
            "How dhikr and dua protect and strengthen your faith.",
            "protection iman faith belief strengthen shield guard duas",
        ),
        IndexEntry::new(
            "The Universe Glorifies Allah",
            "universe-glorifies-allah.html",
            "Reflections on how all creation remembers and glorifies Allah.",
            "universe glorifies allah creation nature dhikr tasbih heavens earth",
        ),
        IndexEntry::new(
            "Quran - The Best Dhikr",
            "quran-best-dhikr.html",
            "Why reciting and reflecting on the Quran is the best form of dhikr.",
            "quran best dhikr recitation tilawah reading reflection kalam allah",
        ),
        IndexEntry::new(
            "Ruqyah - Islamic Healing",
            "ruqyah.html",
            "Quranic verses and duas for spiritual healing and protection.",
            "ruqyah healing protection evil eye sihr magic black spiritual",
        ),
        // Tools and Resources
        IndexEntry::new(
            "Digital Dhikr Counter",
            "digital-counter.html",
            "Use a digital counter to keep track of your dhikr and tasbih. Count your remembrance.",
            "digital counter tasbih dhikr tool tracker counting subhanallah alhamdulillah",
        ),
        IndexEntry::new(
            "Islamic Articles",
            "articles.html",
            "Read articles on faith, prayer, character, and spiritual growth in Islam.",
            "articles knowledge blog iman salah character spirituality islam learning",
        ),
        IndexEntry::new(
            "Names of Allah (Asma ul-Husna)",
            "names-of-allah-new.html",
            "Explore and reflect on the 99 beautiful names of Allah with meanings.",
            "names of allah asmaul husna 99 names beautiful attributes qualities",
        ),
        IndexEntry::new(
            "Teaching Resources",
            "resources.html",
            "Resources and tools to support Islamic teaching and learning.",
            "resources teaching teacher course classroom education learning materials",
        ),
        IndexEntry::new(
            "Publications",
            "publications.html",
            "Books and publications from Mansheu Dawah.",
            "books publications pdf read download library islamic",
        ),
        IndexEntry::new(
            "Quotes & Reminders",
            "quotes-reminders.html",
            "Visual Islamic quotes and short reminders to share on social media.",
            "quotes reminders images social share instagram facebook twitter wisdom",
        ),
        IndexEntry::new(
            "About Mansheu Dawah",
            "about.html",
            "Learn about our story, mission, vision, and impact in spreading Islamic knowledge.",
            "about mission story vision team history organization foundation",
        ),
        IndexEntry::new(
            "Contact",
            "contact.html",
            "Get in touch for questions, feedback, or support. Send us a message.",
            "contact support help message email whatsapp communication",
        ),
    ]
}
