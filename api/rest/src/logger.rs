pub fn logger_format() -> &'static str {
    "%{r}a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %T"
}
