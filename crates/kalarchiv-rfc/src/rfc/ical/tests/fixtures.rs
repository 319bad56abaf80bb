//! iCalendar documents shared by the document-level tests.

/// Calendar with a timezone, a bounded series, a single event and two tasks.
pub const MIXED_CALENDAR: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Kalender//DE\r\n\
CALSCALE:GREGORIAN\r\n\
X-WR-CALNAME:Familie\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
DTSTART:19700329T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
TZNAME:CEST\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
DTSTART:19701025T030000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
TZNAME:CET\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:series-1@example.com\r\n\
DTSTAMP:20240101T000000Z\r\n\
DTSTART;TZID=Europe/Berlin:20230102T090000\r\n\
RRULE:FREQ=WEEKLY;UNTIL=20231231T230000Z;BYDAY=MO\r\n\
EXDATE;TZID=Europe/Berlin:20230109T090000,20230116T090000\r\n\
SUMMARY:Wöchentliche Besprechung\\, Raum 2\r\n\
CATEGORIES:Arbeit,Team\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
DESCRIPTION:Erinnerung\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:single-1@example.com\r\n\
DTSTAMP:20240101T000000Z\r\n\
DTSTART;VALUE=DATE:20250815\r\n\
SUMMARY:Sommerfest\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:todo-1@example.com\r\n\
DTSTAMP:20240101T000000Z\r\n\
STATUS:COMPLETED\r\n\
COMPLETED:20240102T100000Z\r\n\
SUMMARY:Steuererklärung\r\n\
END:VTODO\r\n\
BEGIN:VTODO\r\n\
UID:todo-2@example.com\r\n\
DTSTAMP:20240101T000000Z\r\n\
DUE:20250301T170000Z\r\n\
STATUS:NEEDS-ACTION\r\n\
SUMMARY:Reifenwechsel\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";

/// Long text folded in the source, with umlauts and escaped separators.
pub const FOLDED_DESCRIPTION: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Kalender//DE\r\n\
BEGIN:VEVENT\r\n\
UID:folded@example.com\r\n\
DESCRIPTION:Dies ist eine sehr lange Beschreibung\\, die über mehrere Zeile\r\n \
 n gefaltet wurde und Umlaute wie ä\\, ö und ü enthält.\\nZweite Zeile.\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
