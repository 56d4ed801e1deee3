//! vCard test fixtures.
//!
//! RFC examples plus cards in the shapes legacy phones and desktop clients
//! produce.

/// RFC 6350 §7 - Author's vCard example
pub const VCARD_AUTHOR: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
TEL;VALUE=uri;TYPE=work,voice;PREF=1:tel:+1-418-656-9254;ext=102\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n";

/// RFC 2426 §7 - Frank Dawson's vCard
pub const VCARD_RFC2426: &str = "\
BEGIN:vCard\r\n\
VERSION:3.0\r\n\
FN:Frank Dawson\r\n\
N:Dawson;Frank;;;\r\n\
ORG:Lotus Development Corporation\r\n\
ADR;TYPE=WORK,POSTAL,PARCEL:;;6544 Battleford Drive\r\n \
 ;Raleigh;NC;27613-3502;U.S.A.\r\n\
TEL;TYPE=VOICE,MSG,WORK:+1-919-676-9515\r\n\
TEL;TYPE=FAX,WORK:+1-919-676-9564\r\n\
EMAIL;TYPE=INTERNET,PREF:Frank_Dawson@Lotus.com\r\n\
EMAIL;TYPE=INTERNET:fdawson@earthlink.net\r\n\
URL:http://home.earthlink.net/~fdawson\r\n\
END:vCard\r\n";

/// vCard 2.1 as exported by older phones: bare flags and quoted-printable.
pub const VCARD_21_PHONE: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:M=C3=BCller;J=C3=BCrgen\r\n\
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen M=C3=BCller\r\n\
TEL;CELL;PREF:+49 170 1234567\r\n\
TEL;HOME;VOICE:+49 221 123456\r\n\
NOTE;ENCODING=QUOTED-PRINTABLE:Erste Zeile=0D=0A=\r\n\
Zweite Zeile\r\n\
X-IRMC-LUID:000200000123\r\n\
END:VCARD\r\n";

/// vCard with grouped properties and vendor labels
pub const VCARD_GROUPED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Robert Wilson\r\n\
N:Wilson;Robert;;;\r\n\
item1.ADR;type=HOME:;;456 Oak Ave;Hometown;NY;67890;USA\r\n\
item1.X-ABADR:us\r\n\
item2.TEL:+1-555-555-0100\r\n\
item2.X-ABLabel:_$!<Assistant>!$_\r\n\
CATEGORIES:Friends,Family\r\n\
END:VCARD\r\n";

/// vCard 4.0 group with members
pub const VCARD_GROUP: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
KIND:group\r\n\
FN:The Doe Family\r\n\
MEMBER:urn:uuid:03a0e51f-d1aa-4385-8a53-e29025acd8af\r\n\
MEMBER:mailto:jane.doe@example.com\r\n\
END:VCARD\r\n";

/// vCard 3.0 with an inline photo
pub const VCARD_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Erika Mustermann\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:/9j/4AAQSkZJRgABAQEASABIAAAAAQIDBAUGBwgJCgsMDQ4P\r\n\
 \x20EBESExQVFhcYGRobHB0eHyAhIiMkJSYn/9k=\r\n\
END:VCARD\r\n";
